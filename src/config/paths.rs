//! Path management for bank-cli
//!
//! ## Path Resolution Order
//!
//! 1. `BANK_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `bank-cli` (via `directories`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BankError;

/// Manages all paths used by bank-cli
#[derive(Debug, Clone)]
pub struct BankPaths {
    /// Base directory for all bank-cli data
    base_dir: PathBuf,
}

impl BankPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BankError> {
        let base_dir = if let Ok(custom) = std::env::var("BANK_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BankPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to accounts.txt
    pub fn accounts_file(&self) -> PathBuf {
        self.base_dir.join("accounts.txt")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BankError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BankError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check whether an account file has been written yet
    pub fn is_initialized(&self) -> bool {
        self.accounts_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BankError> {
    ProjectDirs::from("", "", "bank-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BankError::Config("Could not determine a home directory".into()))
}
