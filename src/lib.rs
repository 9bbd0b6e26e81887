//! Account Service Library
//! # Overview
//!
//! This library provides an in-memory account store served over JSON-RPC 2.0.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, AggregateStats, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::traits`] - The `AccountStore` abstraction
//!   - [`core::concurrent_store`] - Sharded concurrent-map store (default)
//!   - [`core::locked_store`] - Single-lock store
//!   - [`core::service`] - Service contract with logging and error redaction
//! - [`rpc`] - JSON-RPC transport over HTTP
//! - [`telemetry`] - Logging setup
//!
//! # Operations
//!
//! - **ListAccounts**: every stored account, unordered
//! - **GetAccountById**: one account, or NotFound naming the id
//! - **GetTotalBalance**: count, sum and average of all balances
//! - **CreateAccount**: insert a new account under a generated id
//!
//! Accounts are never updated or deleted once stored.

// Module declarations
pub mod cli;
pub mod core;
pub mod rpc;
pub mod telemetry;
pub mod types;

pub use crate::core::{AccountService, AccountStore, ConcurrentAccountStore, LockedAccountStore};
pub use types::{
    Account, AccountCreateRequest, AccountError, AccountId, AccountKind, AggregateStats,
    ErrorKind, ServiceError,
};
