//! Error types for the account service
//!
//! Two layers of errors exist:
//!
//! - [`AccountError`] is produced by stores and carries full detail for
//!   server-side diagnosis.
//! - [`ServiceError`] is what callers see. NotFound keeps its message,
//!   Internal faults are replaced by a fixed summary.
//!
//! # Error Categories
//!
//! - **NotFound**: lookup of an id that is absent (or empty)
//! - **Internal**: any unexpected fault inside an operation

use thiserror::Error;

/// Store-level error with full diagnostic detail
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// No account exists with the requested id
    ///
    /// Empty and unknown ids both end up here.
    #[error("Account not found with id: {id}")]
    NotFound {
        /// The id that was requested
        id: String,
    },

    /// Unexpected fault inside a store operation
    ///
    /// The detail is logged server-side and never returned to callers.
    #[error("Internal error in {operation}: {detail}")]
    Internal {
        /// Store operation that failed
        operation: String,
        /// Description of the fault
        detail: String,
    },
}

impl AccountError {
    /// Create a NotFound error
    pub fn not_found(id: &str) -> Self {
        AccountError::NotFound { id: id.to_string() }
    }

    /// Create an Internal error
    pub fn internal(operation: &str, detail: impl ToString) -> Self {
        AccountError::Internal {
            operation: operation.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Failure categories visible to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Internal,
}

/// Caller-facing error returned across the service boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ServiceError {
    /// Failure category
    pub kind: ErrorKind,
    /// Human-readable, safe-to-expose message
    pub message: String,
}

impl ServiceError {
    /// Create a NotFound service error
    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError {
            kind: ErrorKind::NotFound,
            message: message.into(),
        }
    }

    /// Create an Internal service error with a redacted summary
    pub fn internal(summary: impl Into<String>) -> Self {
        ServiceError {
            kind: ErrorKind::Internal,
            message: summary.into(),
        }
    }
}
