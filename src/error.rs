//! Custom error types for bank-cli
//!
//! Every domain failure is returned to the caller as a `BankError` value. The
//! CLI layer decides how to present it.

use thiserror::Error;

use crate::models::Money;

/// The main error type for bank operations
#[derive(Error, Debug)]
pub enum BankError {
    /// Unknown username or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Username already taken
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    /// Withdrawal or transfer larger than the balance
    #[error("Insufficient balance: need {needed}, have {available}")]
    InsufficientFunds { needed: Money, available: Money },

    /// Transfer target does not exist
    #[error("Recipient account not found: {0}")]
    RecipientNotFound(String),

    /// Account lookup by username failed
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Zero or negative amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Input that the record format or the ledger cannot accept
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reading or writing the account store failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// A line of the account file could not be parsed
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl BankError {
    /// Check if this is a persistence failure
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_) | Self::Io(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidAmount(_))
    }
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for bank operations
pub type BankResult<T> = Result<T, BankError>;
