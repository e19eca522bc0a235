//! Core data models for bank-cli
//!
//! Accounts, their ledgers, and the value types they are built from.

pub mod account;
pub mod money;
pub mod secret;
pub mod transaction;

pub use account::{Account, TransferStyle, DEFAULT_STARTING_BALANCE};
pub use money::{Money, MoneyParseError};
pub use secret::Secret;
pub use transaction::{Transaction, TransactionKind};
