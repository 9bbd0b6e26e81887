//! Account-related types for the account service
//!
//! This module defines the stored Account record, the creation request,
//! the account category enumeration and the computed balance statistics.
//! All types serialize with the wire field names used by the RPC layer.

use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Opaque string assigned by the store on creation (UUID v4 for new records).
pub type AccountId = String;

/// Account categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountKind {
    /// Day-to-day current account
    Checking,

    /// Interest-bearing savings account
    Savings,
}

/// Stored account record
///
/// Records are immutable once inserted; the store only ever adds new ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique, non-empty identifier
    pub id: AccountId,

    /// Monetary amount in a single implicit unit
    pub balance: f64,

    /// Creation timestamp, stored and returned verbatim
    pub created_at: String,

    /// Account category
    pub kind: AccountKind,
}

impl Account {
    /// Create an account record with an explicit identifier
    ///
    /// Used for seed data; accounts created through the store always get
    /// a generated identifier via [`Account::from_request`].
    pub fn new(
        id: impl Into<AccountId>,
        balance: f64,
        created_at: impl Into<String>,
        kind: AccountKind,
    ) -> Self {
        Account {
            id: id.into(),
            balance,
            created_at: created_at.into(),
            kind,
        }
    }

    /// Build a new account from a creation request and an assigned id
    pub fn from_request(id: AccountId, request: AccountCreateRequest) -> Self {
        Account {
            id,
            balance: request.balance,
            created_at: request.created_at,
            kind: request.kind,
        }
    }
}

/// Input for the create operation
///
/// Same fields as [`Account`] minus the identifier. Never stored directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreateRequest {
    pub balance: f64,
    pub created_at: String,
    pub kind: AccountKind,
}

impl AccountCreateRequest {
    pub fn new(balance: f64, created_at: impl Into<String>, kind: AccountKind) -> Self {
        AccountCreateRequest {
            balance,
            created_at: created_at.into(),
            kind,
        }
    }
}

/// Aggregate balance statistics
///
/// Computed on demand from a snapshot of the store, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Number of accounts
    pub count: usize,

    /// Sum of all balances
    pub sum: f64,

    /// `sum / count`, or 0 when there are no accounts
    pub average: f64,
}

impl AggregateStats {
    /// Compute statistics over a sequence of balances
    pub fn from_balances<I>(balances: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let (count, sum) = balances
            .into_iter()
            .fold((0usize, 0.0f64), |(count, sum), balance| {
                (count + 1, sum + balance)
            });

        let average = if count > 0 { sum / count as f64 } else { 0.0 };

        AggregateStats {
            count,
            sum,
            average,
        }
    }
}
