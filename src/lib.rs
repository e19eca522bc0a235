//! bank-cli - console banking simulator
//!
//! Manages customer accounts, balances and per-session transaction history,
//! persisted to a flat `username,password,balance` text file between runs.
//!
//! # Architecture
//!
//! - `config`: Data directory and user settings
//! - `error`: Custom error types
//! - `models`: Money, accounts and their ledgers
//! - `storage`: Account record format, stores and the account directory
//! - `services`: Account and ledger operations over [`storage::Storage`]
//! - `display`: Terminal formatting
//! - `cli`: clap subcommands and the interactive menu
//!
//! # Example
//!
//! ```rust
//! use bank_cli::config::Settings;
//! use bank_cli::models::Money;
//! use bank_cli::services::LedgerService;
//! use bank_cli::storage::{MemoryStore, Storage};
//!
//! let mut storage = Storage::open(Box::new(MemoryStore::new()), Settings::default())?;
//! let balance = LedgerService::new(&mut storage).withdraw("sohan", Money::from_units(5000))?;
//! assert_eq!(balance, Money::from_units(19000));
//! # Ok::<(), bank_cli::BankError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BankError, BankResult};
