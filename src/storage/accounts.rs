//! The account directory
//!
//! Maps usernames to accounts. Loaded wholesale from an [`AccountStore`] and
//! saved back wholesale.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::MalformedRecordPolicy;
use crate::error::BankResult;
use crate::models::Account;

use super::record::{format_record, parse_record};
use super::store::AccountStore;

/// In-memory mapping from username to account
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: HashMap<String, Account>,
}

impl AccountDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Load accounts from a store
    ///
    /// A store that can't be read (including one that doesn't exist) yields an
    /// empty directory. Later lines overwrite earlier ones with the same
    /// username. Blank lines are ignored; other unparseable lines are handled
    /// according to `policy`.
    pub fn load(store: &dyn AccountStore, policy: MalformedRecordPolicy) -> BankResult<Self> {
        let lines = match store.read_lines() {
            Ok(lines) => lines,
            Err(e) => {
                warn!(store = %store.describe(), error = %e, "no existing accounts found, starting fresh");
                return Ok(Self::new());
            }
        };

        let mut directory = Self::new();
        for (index, text) in lines.iter().enumerate() {
            if text.trim().is_empty() {
                continue;
            }

            match parse_record(text, index + 1) {
                Ok(account) => {
                    if let Some(previous) = directory.insert(account) {
                        debug!(username = previous.username(), "duplicate record replaced");
                    }
                }
                Err(e) => match policy {
                    MalformedRecordPolicy::Skip => {
                        warn!(store = %store.describe(), error = %e, "skipping account record");
                    }
                    MalformedRecordPolicy::Abort => return Err(e),
                },
            }
        }

        debug!(store = %store.describe(), accounts = directory.len(), "loaded accounts");
        Ok(directory)
    }

    /// Overwrite the store with one record per account, sorted by username
    pub fn save(&self, store: &dyn AccountStore) -> BankResult<()> {
        let lines: Vec<String> = self.list().into_iter().map(format_record).collect();
        store.write_lines(&lines)?;
        debug!(store = %store.describe(), accounts = lines.len(), "saved accounts");
        Ok(())
    }

    pub fn get(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    pub fn get_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.get_mut(username)
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    /// Insert an account, returning the one it replaced
    pub fn insert(&mut self, account: Account) -> Option<Account> {
        self.accounts.insert(account.username().to_string(), account)
    }

    /// Remove an account temporarily; callers put it back with [`insert`](Self::insert)
    pub(crate) fn take(&mut self, username: &str) -> Option<Account> {
        self.accounts.remove(username)
    }

    /// All accounts sorted by username
    pub fn list(&self) -> Vec<&Account> {
        let mut accounts: Vec<_> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.username().cmp(b.username()));
        accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
