//! Concurrent-map account store
//!
//! This module provides the `ConcurrentAccountStore` struct, which keeps
//! account records in a `DashMap` so that concurrent readers and writers
//! never contend on a global lock.
//!
//! # Thread Safety
//!
//! DashMap shards its entries behind independent locks. Reads of different
//! shards proceed in parallel, and an insert only locks the shard its key
//! hashes to. Snapshots taken by `list_all` and `compute_stats` visit one
//! shard at a time, so an account inserted mid-scan may or may not be seen.
//! Any `create` that completed before the scan started is always seen.

use crate::core::traits::{generate_account_id, AccountStore};
use crate::types::{Account, AccountCreateRequest, AccountError, AccountId, AggregateStats};
use dashmap::DashMap;

/// Thread-safe account store backed by a sharded concurrent map
#[derive(Debug)]
pub struct ConcurrentAccountStore {
    /// Account records keyed by id
    accounts: DashMap<AccountId, Account>,
}

impl ConcurrentAccountStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Create a store pre-populated with the given accounts
    ///
    /// Accounts keep their ids. A seed with an empty id gets a generated one,
    /// and when two seeds share an id the first occurrence wins.
    pub fn with_seed<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = Account>,
    {
        let store = Self::new();
        for mut account in seed {
            if account.id.is_empty() {
                account.id = generate_account_id();
            }
            store.accounts.entry(account.id.clone()).or_insert(account);
        }
        store
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for ConcurrentAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for ConcurrentAccountStore {
    fn list_all(&self) -> Result<Vec<Account>, AccountError> {
        Ok(self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    fn get_by_id(&self, id: &str) -> Result<Account, AccountError> {
        if id.is_empty() {
            return Err(AccountError::not_found(id));
        }
        self.accounts
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AccountError::not_found(id))
    }

    fn compute_stats(&self) -> Result<AggregateStats, AccountError> {
        Ok(AggregateStats::from_balances(
            self.accounts.iter().map(|entry| entry.value().balance),
        ))
    }

    fn create(&self, request: AccountCreateRequest) -> Result<Account, AccountError> {
        let account = Account::from_request(generate_account_id(), request);
        self.accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::demo_seed;
    use crate::types::AccountKind;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn checking(balance: f64) -> AccountCreateRequest {
        AccountCreateRequest::new(balance, "2025-01-01T00:00:00", AccountKind::Checking)
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ConcurrentAccountStore::new();

        assert!(store.is_empty());
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_empty_store_stats_are_zero() {
        let store = ConcurrentAccountStore::new();

        let stats = store.compute_stats().unwrap();

        assert_eq!(stats, AggregateStats { count: 0, sum: 0.0, average: 0.0 });
    }

    #[test]
    fn test_seeded_stats() {
        let store = ConcurrentAccountStore::with_seed(demo_seed());

        let stats = store.compute_stats().unwrap();

        assert_eq!(stats.count, 2);
        assert_eq!(stats.sum, 6001.25);
        assert_eq!(stats.average, 3000.625);
    }

    #[test]
    fn test_create_then_get_returns_same_account() {
        let store = ConcurrentAccountStore::new();

        let created = store.create(checking(250.0)).unwrap();
        let fetched = store.get_by_id(&created.id).unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.balance, 250.0);
        assert_eq!(created.kind, AccountKind::Checking);
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = ConcurrentAccountStore::with_seed(demo_seed());

        let result = store.get_by_id("does-not-exist");

        assert_eq!(result, Err(AccountError::not_found("does-not-exist")));
    }

    #[test]
    fn test_get_empty_id_is_not_found() {
        let store = ConcurrentAccountStore::with_seed(vec![Account::new(
            "",
            1.0,
            "t",
            AccountKind::Savings,
        )]);

        assert_eq!(store.get_by_id(""), Err(AccountError::not_found("")));
    }

    #[test]
    fn test_seed_with_empty_id_gets_generated_id() {
        let store = ConcurrentAccountStore::with_seed(vec![Account::new(
            "",
            1.0,
            "t",
            AccountKind::Savings,
        )]);

        let accounts = store.list_all().unwrap();

        assert_eq!(accounts.len(), 1);
        assert!(!accounts[0].id.is_empty());
    }

    #[test]
    fn test_duplicate_seed_first_wins() {
        let store = ConcurrentAccountStore::with_seed(vec![
            Account::new("dup", 1.0, "first", AccountKind::Checking),
            Account::new("dup", 2.0, "second", AccountKind::Savings),
        ]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id("dup").unwrap().created_at, "first");
    }

    #[test]
    fn test_list_grows_with_each_create() {
        let store = ConcurrentAccountStore::with_seed(demo_seed());

        for i in 0..5 {
            store.create(checking(i as f64)).unwrap();
            assert_eq!(store.list_all().unwrap().len(), 2 + i + 1);
        }
        assert_eq!(store.compute_stats().unwrap().count, 7);
    }

    #[test]
    fn test_concurrent_creates_produce_unique_ids() {
        let store = Arc::new(ConcurrentAccountStore::new());
        let mut handles = vec![];

        for t in 0..8 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                (0..100)
                    .map(|i| store.create(checking((t * 100 + i) as f64)).unwrap().id)
                    .collect::<Vec<_>>()
            }));
        }

        let ids: Vec<String> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        let unique: HashSet<&String> = ids.iter().collect();

        assert_eq!(ids.len(), 800);
        assert_eq!(unique.len(), 800);
        assert_eq!(store.len(), 800);
    }
}
