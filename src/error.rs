//! Custom error types for Passbook
//!
//! The ledger core is total and never fails; these errors come from the
//! layers around it (configuration, the audit log, and the optional
//! overdraft check in the teller).

use thiserror::Error;

use crate::models::Money;

/// The main error type for Passbook operations
#[derive(Error, Debug)]
pub enum PassbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Withdrawal refused because the overdraft policy forbids a negative balance
    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Money, available: Money },
}

impl PassbookError {
    /// Check if this is an insufficient funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for PassbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PassbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Passbook operations
pub type PassbookResult<T> = Result<T, PassbookError>;
