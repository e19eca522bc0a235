//! Storage layer for bank-cli
//!
//! Line-oriented account records behind the [`AccountStore`] trait, the
//! in-memory [`AccountDirectory`], and the [`Storage`] value that ties them to
//! the user's settings.

pub mod accounts;
pub mod file_io;
pub mod init;
pub mod record;
pub mod store;

pub use accounts::AccountDirectory;
pub use file_io::{read_lines, write_lines_atomic};
pub use init::{ensure_seed, SEED_ACCOUNTS};
pub use record::{format_record, parse_record};
pub use store::{AccountStore, FileStore, MemoryStore};

use tracing::warn;

use crate::config::{paths::BankPaths, settings::Settings};
use crate::error::BankError;

/// The process's bank state: settings, the directory, and where it persists
pub struct Storage {
    store: Box<dyn AccountStore>,
    settings: Settings,
    pub accounts: AccountDirectory,
}

impl Storage {
    /// Seed the store if needed, then load the directory from it
    ///
    /// Seeding and read failures are logged and leave an empty directory.
    /// Only a malformed record under the `abort` policy is an error.
    pub fn open(store: Box<dyn AccountStore>, settings: Settings) -> Result<Self, BankError> {
        if let Err(e) = ensure_seed(store.as_ref()) {
            warn!(store = %store.describe(), error = %e, "failed to write default accounts");
        }

        let accounts = AccountDirectory::load(store.as_ref(), settings.malformed_records)?;

        Ok(Self {
            store,
            settings,
            accounts,
        })
    }

    /// Open the file-backed store under `paths`
    ///
    /// A data directory that cannot be created is logged; the store then
    /// fails its own reads and writes and the bank runs in memory.
    pub fn from_paths(paths: &BankPaths, settings: Settings) -> Result<Self, BankError> {
        if let Err(e) = paths.ensure_directories() {
            warn!(dir = %paths.base_dir().display(), error = %e, "data directory unavailable, continuing in memory");
        }
        Self::open(Box::new(FileStore::new(paths.accounts_file())), settings)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Write every account to the store
    pub fn save_all(&self) -> Result<(), BankError> {
        self.accounts.save(self.store.as_ref())
    }

    /// Save, logging instead of failing
    ///
    /// Returns `false` if the store could not be written; the in-memory state
    /// is kept either way.
    pub fn persist(&self) -> bool {
        match self.save_all() {
            Ok(()) => true,
            Err(e) => {
                warn!(store = %self.store.describe(), error = %e, "error saving accounts, continuing in memory");
                false
            }
        }
    }
}
