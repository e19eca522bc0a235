//! Account service
//!
//! Account creation, login and lookup over the directory held in [`Storage`].

use tracing::info;

use crate::error::{BankError, BankResult};
use crate::models::account::{validate_password, validate_username};
use crate::models::{Account, Money};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a mut Storage,
}

impl<'a> AccountService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create an account with the configured starting balance and save
    ///
    /// The username is trimmed. A failed save is logged; the account still
    /// exists in memory and creation succeeds.
    pub fn create(&mut self, username: &str, password: &str) -> BankResult<Account> {
        let username = username.trim();
        validate_username(username)?;
        validate_password(password)?;

        if self.storage.accounts.contains(username) {
            return Err(BankError::DuplicateUsername(username.to_string()));
        }

        let account = Account::new(username, password, self.storage.settings().starting_balance);
        self.storage.accounts.insert(account.clone());
        self.storage.persist();

        info!(username, "account created");
        Ok(account)
    }

    /// Check credentials; unknown users and wrong passwords are indistinguishable
    pub fn login(&self, username: &str, password: &str) -> BankResult<&Account> {
        self.storage
            .accounts
            .get(username)
            .filter(|account| account.authenticate(password))
            .ok_or(BankError::InvalidCredentials)
    }

    /// Look up an account by exact username
    pub fn find(&self, username: &str) -> Option<&Account> {
        self.storage.accounts.get(username)
    }

    pub fn exists(&self, username: &str) -> bool {
        self.storage.accounts.contains(username)
    }

    /// All accounts sorted by username
    pub fn list(&self) -> Vec<&Account> {
        self.storage.accounts.list()
    }

    pub fn balance(&self, username: &str) -> BankResult<Money> {
        self.find(username)
            .map(Account::balance)
            .ok_or_else(|| BankError::AccountNotFound(username.to_string()))
    }
}
