//! Lock-guarded account store
//!
//! This module provides the `LockedAccountStore`, a `HashMap` behind a single
//! reader-writer lock. Reads share the lock; `create` takes it exclusively,
//! so inserts are serialized against each other and against readers.
//!
//! A poisoned lock is reported as `AccountError::Internal` rather than
//! propagated as a panic.

use crate::core::traits::{generate_account_id, AccountStore};
use crate::types::{Account, AccountCreateRequest, AccountError, AccountId, AggregateStats};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Account store guarded by one `RwLock`
#[derive(Debug, Default)]
pub struct LockedAccountStore {
    accounts: RwLock<HashMap<AccountId, Account>>,
}

impl LockedAccountStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-populated with the given accounts
    ///
    /// Same rules as the concurrent store: empty seed ids are replaced with a
    /// generated id, and the first of two seeds sharing an id wins.
    pub fn with_seed<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = Account>,
    {
        let mut accounts = HashMap::new();
        for mut account in seed {
            if account.id.is_empty() {
                account.id = generate_account_id();
            }
            accounts.entry(account.id.clone()).or_insert(account);
        }
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    fn read(
        &self,
        operation: &str,
    ) -> Result<RwLockReadGuard<'_, HashMap<AccountId, Account>>, AccountError> {
        self.accounts
            .read()
            .map_err(|e| AccountError::internal(operation, e))
    }

    fn write(
        &self,
        operation: &str,
    ) -> Result<RwLockWriteGuard<'_, HashMap<AccountId, Account>>, AccountError> {
        self.accounts
            .write()
            .map_err(|e| AccountError::internal(operation, e))
    }
}

impl AccountStore for LockedAccountStore {
    fn list_all(&self) -> Result<Vec<Account>, AccountError> {
        Ok(self.read("list_all")?.values().cloned().collect())
    }

    fn get_by_id(&self, id: &str) -> Result<Account, AccountError> {
        if id.is_empty() {
            return Err(AccountError::not_found(id));
        }
        self.read("get_by_id")?
            .get(id)
            .cloned()
            .ok_or_else(|| AccountError::not_found(id))
    }

    fn compute_stats(&self) -> Result<AggregateStats, AccountError> {
        let accounts = self.read("compute_stats")?;
        Ok(AggregateStats::from_balances(
            accounts.values().map(|account| account.balance),
        ))
    }

    fn create(&self, request: AccountCreateRequest) -> Result<Account, AccountError> {
        let account = Account::from_request(generate_account_id(), request);
        self.write("create")?
            .insert(account.id.clone(), account.clone());
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::demo_seed;
    use crate::types::AccountKind;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_seeded_lookup() {
        let store = LockedAccountStore::with_seed(demo_seed());

        let account = store.get_by_id("test-1").unwrap();

        assert_eq!(account.balance, 1000.50);
        assert_eq!(account.kind, AccountKind::Checking);
    }

    #[test]
    fn test_create_is_visible_to_later_reads() {
        let store = LockedAccountStore::new();
        let request = AccountCreateRequest::new(42.5, "2025-01-01T00:00:00", AccountKind::Savings);

        let created = store.create(request).unwrap();

        assert_eq!(store.list_all().unwrap(), vec![created.clone()]);
        assert_eq!(store.get_by_id(&created.id).unwrap(), created);
        assert_eq!(store.compute_stats().unwrap().sum, 42.5);
    }

    #[test]
    fn test_unknown_and_empty_ids_are_not_found() {
        let store = LockedAccountStore::with_seed(demo_seed());

        assert_eq!(
            store.get_by_id("does-not-exist"),
            Err(AccountError::not_found("does-not-exist"))
        );
        assert_eq!(store.get_by_id(""), Err(AccountError::not_found("")));
    }

    #[test]
    fn test_poisoned_lock_is_internal_error() {
        let store = Arc::new(LockedAccountStore::with_seed(demo_seed()));

        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            let _guard = poisoner.accounts.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(
            store.list_all(),
            Err(AccountError::Internal { ref operation, .. }) if operation == "list_all"
        ));
        assert!(matches!(
            store.get_by_id("test-1"),
            Err(AccountError::Internal { .. })
        ));
        assert!(matches!(
            store.compute_stats(),
            Err(AccountError::Internal { .. })
        ));
        assert!(matches!(
            store.create(AccountCreateRequest::new(1.0, "t", AccountKind::Checking)),
            Err(AccountError::Internal { .. })
        ));
    }
}
