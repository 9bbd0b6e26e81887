//! Core trait for account storage
//!
//! This module defines the trait abstraction that allows the lock-based and
//! the concurrent-map store implementations to be used interchangeably.

use crate::types::{Account, AccountCreateRequest, AccountError, AggregateStats};

/// Trait for storing and querying account records
///
/// Implementations are shared by every in-flight request, so all methods take
/// `&self` and must be safe to call from many threads at once. `create` is the
/// only mutator and must never hand out the same id twice.
pub trait AccountStore: Send + Sync {
    /// Snapshot of every stored account, in no particular order
    fn list_all(&self) -> Result<Vec<Account>, AccountError>;

    /// Look up one account; empty or unknown ids yield `AccountError::NotFound`
    fn get_by_id(&self, id: &str) -> Result<Account, AccountError>;

    /// Balance statistics computed fresh from current contents
    fn compute_stats(&self) -> Result<AggregateStats, AccountError>;

    /// Insert a new account under a freshly generated id and return it
    fn create(&self, request: AccountCreateRequest) -> Result<Account, AccountError>;
}

/// Generate a new account identifier
///
/// UUID v4; collisions are treated as impossible within a single process.
pub fn generate_account_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
