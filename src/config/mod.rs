//! Configuration module for bank-cli
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BankPaths;
pub use settings::{MalformedRecordPolicy, Settings};
