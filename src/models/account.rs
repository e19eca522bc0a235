//! Account model
//!
//! An account owns its credentials, its balance and its ledger. Every
//! operation that moves money appends to the ledger in the same call.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::secret::Secret;
use super::transaction::{Transaction, TransactionKind};
use crate::error::{BankError, BankResult};

/// Balance given to newly created accounts
pub const DEFAULT_STARTING_BALANCE: Money = Money::from_units(10_000);

/// How a transfer is written to the two ledgers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransferStyle {
    /// Withdraw + TransferOut on the source, Deposit + TransferIn on the target.
    /// The transfer records annotate a move already logged by the first pair.
    #[default]
    Composed,
    /// A single TransferOut / TransferIn record per side
    Consolidated,
}

/// A customer account
#[derive(Debug, Clone)]
pub struct Account {
    username: String,
    password: Secret,
    balance: Money,
    /// Balance at creation or load time; the ledger starts here
    opening_balance: Money,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Create an account with an empty ledger
    pub fn new(username: impl Into<String>, password: impl Into<Secret>, balance: Money) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            balance,
            opening_balance: balance,
            transactions: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn opening_balance(&self) -> Money {
        self.opening_balance
    }

    /// The ledger, oldest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Exact, case-sensitive password check
    pub fn authenticate(&self, candidate: &str) -> bool {
        self.password.matches(candidate)
    }

    /// Pay money in
    ///
    /// Fails without side effects if the amount is not positive or the new
    /// balance would not fit.
    pub fn deposit(&mut self, amount: Money) -> BankResult<()> {
        ensure_positive(amount)?;
        let balance = self.credited(amount)?;
        self.record(balance, TransactionKind::Deposit, amount);
        Ok(())
    }

    /// Take money out; fails without side effects if the balance is short
    pub fn withdraw(&mut self, amount: Money) -> BankResult<()> {
        ensure_positive(amount)?;
        let balance = self.debited(amount)?;
        self.record(balance, TransactionKind::Withdraw, amount);
        Ok(())
    }

    /// Move money to `target`
    ///
    /// Fails without touching either account if the amount is not positive,
    /// exceeds this account's balance, or would overflow the target's balance.
    pub fn transfer(
        &mut self,
        target: &mut Account,
        amount: Money,
        style: TransferStyle,
    ) -> BankResult<()> {
        ensure_positive(amount)?;
        let source_balance = self.debited(amount)?;
        let target_balance = target.credited(amount)?;

        let sent = TransactionKind::TransferOut {
            counterparty: target.username.clone(),
        };
        let received = TransactionKind::TransferIn {
            counterparty: self.username.clone(),
        };

        match style {
            TransferStyle::Composed => {
                self.record(source_balance, TransactionKind::Withdraw, amount);
                target.record(target_balance, TransactionKind::Deposit, amount);
                self.transactions.push(Transaction::new(sent, amount));
                target.transactions.push(Transaction::new(received, amount));
            }
            TransferStyle::Consolidated => {
                self.record(source_balance, sent, amount);
                target.record(target_balance, received, amount);
            }
        }

        Ok(())
    }

    /// Recompute the balance from the opening balance and the ledger
    ///
    /// Under [`TransferStyle::Composed`] the transfer records are skipped since
    /// the Withdraw/Deposit pair already carries the amount. `None` if the sum
    /// leaves the representable range.
    pub fn ledger_balance(&self, style: TransferStyle) -> Option<Money> {
        let movements = self
            .transactions
            .iter()
            .filter(|t| style == TransferStyle::Consolidated || !t.kind().is_transfer())
            .map(Transaction::signed_amount);
        Money::checked_sum(std::iter::once(self.opening_balance).chain(movements))
    }

    /// Render the persisted `username,password,balance` line
    pub fn to_record(&self) -> String {
        format!("{},{},{}", self.username, self.password.expose(), self.balance)
    }

    /// The balance after paying in `amount`
    fn credited(&self, amount: Money) -> BankResult<Money> {
        self.balance.checked_add(amount).ok_or_else(|| {
            BankError::InvalidAmount(format!(
                "{} would take the balance of {} out of range",
                amount, self.username
            ))
        })
    }

    /// The balance after taking out `amount`
    fn debited(&self, amount: Money) -> BankResult<Money> {
        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance.checked_sub(amount).ok_or_else(|| {
            BankError::InvalidAmount(format!(
                "{} would take the balance of {} out of range",
                amount, self.username
            ))
        })
    }

    fn record(&mut self, balance: Money, kind: TransactionKind, amount: Money) {
        self.balance = balance;
        self.transactions.push(Transaction::new(kind, amount));
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.balance)
    }
}

fn ensure_positive(amount: Money) -> BankResult<()> {
    if !amount.is_positive() {
        return Err(BankError::InvalidAmount(format!(
            "amount must be greater than zero, got {}",
            amount
        )));
    }
    Ok(())
}

/// Check a username before it is stored
///
/// The record format has no escaping, so commas and line breaks are refused.
pub fn validate_username(username: &str) -> BankResult<()> {
    if username.trim().is_empty() {
        return Err(BankError::Validation("Username cannot be empty".into()));
    }
    validate_field("Username", username)
}

/// Check a password before it is stored
pub fn validate_password(password: &str) -> BankResult<()> {
    validate_field("Password", password)
}

fn validate_field(name: &str, value: &str) -> BankResult<()> {
    if value.contains([',', '\n', '\r']) {
        return Err(BankError::Validation(format!(
            "{} cannot contain commas or line breaks",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sohan() -> Account {
        Account::new("sohan", "pass123", Money::from_units(24000))
    }

    fn sharvari() -> Account {
        Account::new("sharvari", "abc123", Money::from_units(14000))
    }

    #[test]
    fn test_new_account() {
        let account = sohan();
        assert_eq!(account.username(), "sohan");
        assert_eq!(account.balance(), Money::from_units(24000));
        assert_eq!(account.opening_balance(), account.balance());
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_authenticate() {
        let account = sohan();
        assert!(account.authenticate("pass123"));
        assert!(!account.authenticate("Pass123"));
        assert!(!account.authenticate("wrong"));
    }

    #[test]
    fn test_deposit_appends_transaction() {
        let mut account = sohan();
        account.deposit(Money::from_units(500)).unwrap();

        assert_eq!(account.balance(), Money::from_units(24500));
        assert_eq!(account.transactions().len(), 1);
        assert_eq!(account.transactions()[0].kind(), &TransactionKind::Deposit);
        assert_eq!(account.transactions()[0].amount(), Money::from_units(500));
    }

    #[test]
    fn test_withdraw_from_seed_balance() {
        let mut account = sohan();
        account.withdraw(Money::from_units(5000)).unwrap();

        assert_eq!(account.balance(), Money::from_units(19000));
        assert_eq!(account.transactions().len(), 1);
        assert_eq!(account.transactions()[0].kind(), &TransactionKind::Withdraw);
    }

    #[test]
    fn test_withdraw_exact_balance_is_allowed() {
        let mut account = Account::new("darshan", "neha@123", Money::from_units(8000));
        account.withdraw(Money::from_units(8000)).unwrap();
        assert!(account.balance().is_zero());
    }

    #[test]
    fn test_overdraw_has_no_side_effect() {
        let mut account = sohan();
        let err = account.withdraw(Money::from_units(24001)).unwrap_err();

        assert!(matches!(err, BankError::InsufficientFunds { .. }));
        assert_eq!(account.balance(), Money::from_units(24000));
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        let mut account = sohan();

        assert!(matches!(
            account.deposit(Money::zero()),
            Err(BankError::InvalidAmount(_))
        ));
        assert!(matches!(
            account.deposit(Money::from_units(-10)),
            Err(BankError::InvalidAmount(_))
        ));
        assert!(matches!(
            account.withdraw(Money::from_units(-10)),
            Err(BankError::InvalidAmount(_))
        ));
        assert_eq!(account.balance(), Money::from_units(24000));
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_deposit_overflow_rejected() {
        let mut account = sohan();
        let huge = Money::parse("92233720368547758.07").unwrap();

        assert!(matches!(account.deposit(huge), Err(BankError::InvalidAmount(_))));
        assert_eq!(account.balance(), Money::from_units(24000));
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_transfer_overflowing_target_touches_neither_account() {
        let mut source = sohan();
        let mut target = Account::new("rich", "pw", Money::from_cents(i64::MAX - 100));

        for style in [TransferStyle::Composed, TransferStyle::Consolidated] {
            let err = source
                .transfer(&mut target, Money::from_units(2), style)
                .unwrap_err();

            assert!(matches!(err, BankError::InvalidAmount(_)));
            assert_eq!(source.balance(), Money::from_units(24000));
            assert_eq!(target.balance(), Money::from_cents(i64::MAX - 100));
            assert!(source.transactions().is_empty());
            assert!(target.transactions().is_empty());
        }
    }

    #[test]
    fn test_composed_transfer_logs_two_records_per_side() {
        let mut source = sohan();
        let mut target = sharvari();

        source.withdraw(Money::from_units(5000)).unwrap();
        source
            .transfer(&mut target, Money::from_units(1000), TransferStyle::Composed)
            .unwrap();

        assert_eq!(source.balance(), Money::from_units(18000));
        assert_eq!(target.balance(), Money::from_units(15000));

        let source_kinds: Vec<_> = source.transactions().iter().map(|t| t.kind().clone()).collect();
        assert_eq!(
            source_kinds,
            vec![
                TransactionKind::Withdraw,
                TransactionKind::Withdraw,
                TransactionKind::TransferOut {
                    counterparty: "sharvari".into()
                },
            ]
        );

        let target_kinds: Vec<_> = target.transactions().iter().map(|t| t.kind().clone()).collect();
        assert_eq!(
            target_kinds,
            vec![
                TransactionKind::Deposit,
                TransactionKind::TransferIn {
                    counterparty: "sohan".into()
                },
            ]
        );
    }

    #[test]
    fn test_consolidated_transfer_logs_one_record_per_side() {
        let mut source = sohan();
        let mut target = sharvari();

        source
            .transfer(&mut target, Money::from_units(1000), TransferStyle::Consolidated)
            .unwrap();

        assert_eq!(source.balance(), Money::from_units(23000));
        assert_eq!(target.balance(), Money::from_units(15000));
        assert_eq!(source.transactions().len(), 1);
        assert_eq!(target.transactions().len(), 1);
        assert_eq!(
            source.transactions()[0].kind().counterparty(),
            Some("sharvari")
        );
        assert_eq!(target.transactions()[0].kind().counterparty(), Some("sohan"));
    }

    #[test]
    fn test_failed_transfer_touches_neither_account() {
        let mut source = sharvari();
        let mut target = sohan();

        let err = source
            .transfer(&mut target, Money::from_units(14001), TransferStyle::Composed)
            .unwrap_err();

        assert!(matches!(err, BankError::InsufficientFunds { .. }));
        assert_eq!(source.balance(), Money::from_units(14000));
        assert_eq!(target.balance(), Money::from_units(24000));
        assert!(source.transactions().is_empty());
        assert!(target.transactions().is_empty());
    }

    #[test]
    fn test_ledger_balance_matches_after_mixed_activity() {
        for style in [TransferStyle::Composed, TransferStyle::Consolidated] {
            let mut a = sohan();
            let mut b = sharvari();

            a.deposit(Money::from_cents(12_345)).unwrap();
            a.withdraw(Money::from_units(700)).unwrap();
            a.transfer(&mut b, Money::from_cents(99_950), style).unwrap();
            b.transfer(&mut a, Money::from_units(300), style).unwrap();
            b.withdraw(Money::from_cents(1)).unwrap();
            assert!(a.withdraw(Money::from_units(1_000_000)).is_err());

            assert_eq!(a.ledger_balance(style), Some(a.balance()));
            assert_eq!(b.ledger_balance(style), Some(b.balance()));
        }
    }

    #[test]
    fn test_deposits_and_withdrawals_sum() {
        let mut account = Account::new("prahllad", "java456", Money::from_units(10000));
        let deposits = [150, 2500, 75];
        let withdrawals = [1000, 40, 9000];

        for d in deposits {
            account.deposit(Money::from_units(d)).unwrap();
        }
        for w in withdrawals {
            account.withdraw(Money::from_units(w)).unwrap();
        }

        let expected = 10000 + deposits.iter().sum::<i64>() - withdrawals.iter().sum::<i64>();
        assert_eq!(account.balance(), Money::from_units(expected));
        assert_eq!(account.transactions().len(), 6);
    }

    #[test]
    fn test_to_record() {
        let mut account = sohan();
        account.withdraw(Money::from_cents(50)).unwrap();
        assert_eq!(account.to_record(), "sohan,pass123,23999.5");
    }

    #[test]
    fn test_debug_hides_password() {
        let account = sohan();
        assert!(!format!("{:?}", account).contains("pass123"));
        assert_eq!(format!("{}", account), "sohan (24000.0)");
    }

    #[test]
    fn test_field_validation() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("  ").is_err());
        assert!(validate_username("a,b").is_err());
        assert!(validate_password("p\nq").is_err());
        assert!(validate_password("").is_ok());
    }
}
