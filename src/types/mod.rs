//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account records, creation requests and balance statistics
//! - `error`: Error types for stores and the service boundary

pub mod account;
pub mod error;

pub use account::{Account, AccountCreateRequest, AccountId, AccountKind, AggregateStats};
pub use error::{AccountError, ErrorKind, ServiceError};
