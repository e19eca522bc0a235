//! User settings for bank-cli
//!
//! Every field has a default, so a missing or partial `config.json` still
//! loads.

use serde::{Deserialize, Serialize};

use super::paths::BankPaths;
use crate::error::BankError;
use crate::models::{Money, TransferStyle, DEFAULT_STARTING_BALANCE};

/// What to do with an account line that cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRecordPolicy {
    /// Log a warning and keep loading the remaining lines
    #[default]
    Skip,
    /// Fail the whole load
    Abort,
}

/// User settings for bank-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Balance credited to newly created accounts
    #[serde(default = "default_starting_balance")]
    pub starting_balance: Money,

    /// How transfers are written to the two ledgers
    #[serde(default)]
    pub transfer_style: TransferStyle,

    /// Handling of unparseable lines in accounts.txt
    #[serde(default)]
    pub malformed_records: MalformedRecordPolicy,
}

fn default_currency() -> String {
    "Rs.".to_string()
}

fn default_starting_balance() -> Money {
    DEFAULT_STARTING_BALANCE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            starting_balance: default_starting_balance(),
            transfer_style: TransferStyle::default(),
            malformed_records: MalformedRecordPolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BankPaths) -> Result<Self, BankError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BankError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| BankError::Config(format!("Failed to parse settings file: {}", e)))?;

        if !settings.starting_balance.is_positive() {
            return Err(BankError::Config(
                "starting_balance must be greater than zero".into(),
            ));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BankPaths) -> Result<(), BankError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BankError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BankError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
