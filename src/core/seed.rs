//! Demonstration dataset
//!
//! Stores start empty; the binary loads these two accounts at startup unless
//! seeding is disabled on the command line.

use crate::types::{Account, AccountKind};

/// The two demonstration accounts loaded at startup
pub fn demo_seed() -> Vec<Account> {
    vec![
        Account::new("test-1", 1000.50, "2024-01-15T10:30:00", AccountKind::Checking),
        Account::new("test-2", 5000.75, "2024-01-16T14:45:00", AccountKind::Savings),
    ]
}
