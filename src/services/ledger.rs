//! Ledger service
//!
//! Deposits, withdrawals and transfers addressed by username. These mutate
//! the in-memory directory only; callers decide when to persist.

use std::str::FromStr;

use crate::error::{BankError, BankResult};
use crate::models::{Account, Money, Transaction, TransactionKind, TransferStyle};
use crate::storage::Storage;

/// Which kind of ledger entry a search keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    Deposit,
    Withdraw,
    TransferSent,
    TransferReceived,
}

impl KindFilter {
    pub fn matches(&self, kind: &TransactionKind) -> bool {
        matches!(
            (self, kind),
            (Self::Deposit, TransactionKind::Deposit)
                | (Self::Withdraw, TransactionKind::Withdraw)
                | (Self::TransferSent, TransactionKind::TransferOut { .. })
                | (Self::TransferReceived, TransactionKind::TransferIn { .. })
        )
    }
}

impl FromStr for KindFilter {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            "transfer-sent" => Ok(Self::TransferSent),
            "transfer-received" => Ok(Self::TransferReceived),
            other => Err(BankError::Validation(format!(
                "Unknown transaction type: {}",
                other
            ))),
        }
    }
}

/// Order of search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryOrder {
    #[default]
    Newest,
    Oldest,
}

impl FromStr for HistoryOrder {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            other => Err(BankError::Validation(format!("Unknown order: {}", other))),
        }
    }
}

/// Filter and ordering applied to one account's ledger
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    /// Case-insensitive text matched against the entry's label, which
    /// includes the counterparty of a transfer
    pub search: Option<String>,
    pub kind: Option<KindFilter>,
    pub order: HistoryOrder,
}

impl HistoryQuery {
    pub fn matches(&self, txn: &Transaction) -> bool {
        let kind_ok = self.kind.map_or(true, |k| k.matches(txn.kind()));
        let text_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => txn
                .kind()
                .to_string()
                .to_lowercase()
                .contains(&term.to_lowercase()),
        };
        kind_ok && text_ok
    }
}

/// The entries a [`HistoryQuery`] kept, with totals for the summary line
#[derive(Debug)]
pub struct HistoryPage<'a> {
    pub shown: Vec<&'a Transaction>,
    /// Size of the whole ledger before filtering
    pub total: usize,
    /// Signed sum of the shown entries; `None` if it does not fit
    pub net: Option<Money>,
}

/// Service for moving money
pub struct LedgerService<'a> {
    storage: &'a mut Storage,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Deposit into `username`, returning the new balance
    pub fn deposit(&mut self, username: &str, amount: Money) -> BankResult<Money> {
        let account = self.account_mut(username)?;
        account.deposit(amount)?;
        Ok(account.balance())
    }

    /// Withdraw from `username`, returning the new balance
    pub fn withdraw(&mut self, username: &str, amount: Money) -> BankResult<Money> {
        let account = self.account_mut(username)?;
        account.withdraw(amount)?;
        Ok(account.balance())
    }

    /// Transfer from `from` to `to`, returning the sender's new balance
    ///
    /// Uses the transfer style from settings. On any error neither account
    /// changes.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Money) -> BankResult<Money> {
        if from == to {
            return Err(BankError::Validation(
                "Cannot transfer to the same account".into(),
            ));
        }
        if !self.storage.accounts.contains(to) {
            return Err(BankError::RecipientNotFound(to.to_string()));
        }

        let style = self.storage.settings().transfer_style;
        let mut source = self
            .storage
            .accounts
            .take(from)
            .ok_or_else(|| BankError::AccountNotFound(from.to_string()))?;

        // The source is out of the map, so the target can be borrowed mutably
        let outcome = match self.storage.accounts.get_mut(to) {
            Some(target) => source.transfer(target, amount, style),
            None => Err(BankError::RecipientNotFound(to.to_string())),
        };

        let balance = source.balance();
        self.storage.accounts.insert(source);
        outcome.map(|()| balance)
    }

    /// The ledger for `username`, oldest first
    pub fn history(&self, username: &str) -> BankResult<&[Transaction]> {
        self.storage
            .accounts
            .get(username)
            .map(|account| account.transactions())
            .ok_or_else(|| BankError::AccountNotFound(username.to_string()))
    }

    /// The ledger for `username` filtered and ordered by `query`
    ///
    /// The ledger is kept in the order events happened, so `Newest` is the
    /// reverse of it. Under the composed transfer style the transfer records
    /// are left out of the net since their Withdraw/Deposit pair carries the
    /// amount.
    pub fn search(&self, username: &str, query: &HistoryQuery) -> BankResult<HistoryPage<'_>> {
        let ledger = self.history(username)?;

        let mut shown: Vec<&Transaction> = ledger.iter().filter(|t| query.matches(t)).collect();
        if query.order == HistoryOrder::Newest {
            shown.reverse();
        }

        let style = self.storage.settings().transfer_style;
        let net = Money::checked_sum(
            shown
                .iter()
                .filter(|t| style == TransferStyle::Consolidated || !t.kind().is_transfer())
                .map(|t| t.signed_amount()),
        );

        Ok(HistoryPage {
            shown,
            total: ledger.len(),
            net,
        })
    }

    fn account_mut(&mut self, username: &str) -> BankResult<&mut Account> {
        self.storage
            .accounts
            .get_mut(username)
            .ok_or_else(|| BankError::AccountNotFound(username.to_string()))
    }
}
