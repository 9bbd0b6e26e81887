//! Account service contract
//!
//! `AccountService` is the boundary every transport calls into. It runs each
//! of the four operations against the shared store, emits entry/exit trace
//! lines, and converts store errors into caller-facing [`ServiceError`]s:
//!
//! - NotFound keeps its message (which names the requested id)
//! - Internal is logged with full detail and replaced by a fixed summary

use crate::core::traits::AccountStore;
use crate::types::{Account, AccountCreateRequest, AccountError, AggregateStats, ServiceError};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, info, warn};

/// The four operations exposed over the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListAccounts,
    GetAccountById,
    GetTotalBalance,
    CreateAccount,
}

impl Operation {
    /// All operations, in wire-table order
    pub const ALL: [Operation; 4] = [
        Operation::ListAccounts,
        Operation::GetAccountById,
        Operation::GetTotalBalance,
        Operation::CreateAccount,
    ];

    /// Method name used on the wire
    pub fn method_name(self) -> &'static str {
        match self {
            Operation::ListAccounts => "ListAccounts",
            Operation::GetAccountById => "GetAccountById",
            Operation::GetTotalBalance => "GetTotalBalance",
            Operation::CreateAccount => "CreateAccount",
        }
    }

    /// Redacted message returned when the operation hits an internal fault
    pub fn failure_summary(self) -> &'static str {
        match self {
            Operation::ListAccounts => "Failed to list accounts",
            Operation::GetAccountById => "Internal error",
            Operation::GetTotalBalance => "Failed to compute balance statistics",
            Operation::CreateAccount => "Failed to save account",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

impl FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.method_name() == s)
            .ok_or(())
    }
}

/// Service front for an [`AccountStore`]
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Return every stored account
    pub fn list_accounts(&self) -> Result<Vec<Account>, ServiceError> {
        let op = Operation::ListAccounts;
        info!(">>> {}", op);

        let accounts = self.store.list_all().map_err(|e| Self::fail(op, e))?;

        info!("<<< {}: {} accounts returned", op, accounts.len());
        Ok(accounts)
    }

    /// Return the account with the given id
    pub fn get_account_by_id(&self, id: &str) -> Result<Account, ServiceError> {
        let op = Operation::GetAccountById;
        info!(">>> {} called with id: {}", op, id);

        let account = self.store.get_by_id(id).map_err(|e| Self::fail(op, e))?;

        info!("<<< {}: account found", op);
        Ok(account)
    }

    /// Return count, sum and average of all balances
    pub fn get_total_balance(&self) -> Result<AggregateStats, ServiceError> {
        let op = Operation::GetTotalBalance;
        info!(">>> {}", op);

        let stats = self.store.compute_stats().map_err(|e| Self::fail(op, e))?;
        if !stats.sum.is_finite() || !stats.average.is_finite() {
            let detail = format!(
                "non-finite statistics over {} accounts: sum={} average={}",
                stats.count, stats.sum, stats.average
            );
            return Err(Self::fail(op, AccountError::internal("compute_stats", detail)));
        }

        info!(
            "<<< {}: count={} sum={} average={}",
            op, stats.count, stats.sum, stats.average
        );
        Ok(stats)
    }

    /// Create a new account and return it with its assigned id
    pub fn create_account(&self, request: AccountCreateRequest) -> Result<Account, ServiceError> {
        let op = Operation::CreateAccount;
        info!(">>> {}", op);

        let account = self.store.create(request).map_err(|e| Self::fail(op, e))?;

        info!("<<< {}: account created with id: {}", op, account.id);
        Ok(account)
    }

    /// Log a store error and convert it into what the caller is allowed to see
    fn fail(op: Operation, err: AccountError) -> ServiceError {
        match err {
            AccountError::NotFound { .. } => {
                warn!("<<< {}: {}", op, err);
                ServiceError::not_found(err.to_string())
            }
            AccountError::Internal { .. } => {
                error!("Error in {}: {}", op, err);
                ServiceError::internal(op.failure_summary())
            }
        }
    }
}

impl fmt::Debug for AccountService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountService").finish_non_exhaustive()
    }
}
