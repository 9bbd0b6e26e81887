//! Core business logic module
//!
//! This module contains the account storage and service components:
//! - `traits` - The `AccountStore` abstraction shared by all backends
//! - `concurrent_store` - Sharded concurrent-map backend (default)
//! - `locked_store` - `HashMap` behind a single reader-writer lock
//! - `seed` - Demonstration accounts loaded at startup
//! - `service` - The four-operation service contract used by transports

pub mod concurrent_store;
pub mod locked_store;
pub mod seed;
pub mod service;
pub mod traits;

pub use concurrent_store::ConcurrentAccountStore;
pub use locked_store::LockedAccountStore;
pub use seed::demo_seed;
pub use service::{AccountService, Operation};
pub use traits::AccountStore;

use crate::cli::StoreType;
use crate::types::Account;
use std::sync::Arc;

/// Create an account store based on the specified store type
///
/// Selects the backend at runtime and loads the given seed accounts into it.
/// Pass an empty vector for a clean store.
pub fn create_store(store_type: StoreType, seed: Vec<Account>) -> Arc<dyn AccountStore> {
    match store_type {
        StoreType::Concurrent => Arc::new(ConcurrentAccountStore::with_seed(seed)),
        StoreType::Locked => Arc::new(LockedAccountStore::with_seed(seed)),
    }
}
