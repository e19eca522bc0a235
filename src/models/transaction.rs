//! Transaction model
//!
//! A transaction is an immutable entry in one account's ledger. Transfers are
//! tagged with the username on the other side.

use chrono::{DateTime, Local};
use std::fmt;

use super::money::Money;

/// What kind of ledger event a transaction records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    /// Money paid into the account
    Deposit,
    /// Money taken out of the account
    Withdraw,
    /// Money sent to another account
    TransferOut { counterparty: String },
    /// Money received from another account
    TransferIn { counterparty: String },
}

impl TransactionKind {
    /// Returns true if this kind adds to the balance
    pub fn is_inflow(&self) -> bool {
        matches!(self, Self::Deposit | Self::TransferIn { .. })
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self, Self::TransferOut { .. } | Self::TransferIn { .. })
    }

    /// The other account of a transfer
    pub fn counterparty(&self) -> Option<&str> {
        match self {
            Self::TransferOut { counterparty } | Self::TransferIn { counterparty } => {
                Some(counterparty.as_str())
            }
            Self::Deposit | Self::Withdraw => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdraw => write!(f, "Withdraw"),
            Self::TransferOut { counterparty } => write!(f, "Transferred to {}", counterparty),
            Self::TransferIn { counterparty } => write!(f, "Received from {}", counterparty),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Money,
    timestamp: DateTime<Local>,
}

impl Transaction {
    /// Record an event at the current local time
    pub fn new(kind: TransactionKind, amount: Money) -> Self {
        Self {
            kind,
            amount,
            timestamp: Local::now(),
        }
    }

    pub fn kind(&self) -> &TransactionKind {
        &self.kind
    }

    /// The (positive) amount moved
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Amount with sign applied: positive for inflows, negative for outflows
    pub fn signed_amount(&self) -> Money {
        if self.kind.is_inflow() {
            self.amount
        } else {
            -self.amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(TransactionKind::Deposit.to_string(), "Deposit");
        assert_eq!(TransactionKind::Withdraw.to_string(), "Withdraw");
        assert_eq!(
            TransactionKind::TransferOut {
                counterparty: "sharvari".into()
            }
            .to_string(),
            "Transferred to sharvari"
        );
        assert_eq!(
            TransactionKind::TransferIn {
                counterparty: "sohan".into()
            }
            .to_string(),
            "Received from sohan"
        );
    }

    #[test]
    fn test_signed_amount() {
        let deposit = Transaction::new(TransactionKind::Deposit, Money::from_units(500));
        let withdraw = Transaction::new(TransactionKind::Withdraw, Money::from_units(200));
        let sent = Transaction::new(
            TransactionKind::TransferOut {
                counterparty: "basanth".into(),
            },
            Money::from_units(100),
        );

        assert_eq!(deposit.signed_amount(), Money::from_units(500));
        assert_eq!(withdraw.signed_amount(), Money::from_units(-200));
        assert_eq!(sent.signed_amount(), Money::from_units(-100));
    }

    #[test]
    fn test_counterparty() {
        let kind = TransactionKind::TransferIn {
            counterparty: "darshan".into(),
        };
        assert_eq!(kind.counterparty(), Some("darshan"));
        assert!(kind.is_transfer());
        assert_eq!(TransactionKind::Deposit.counterparty(), None);
    }
}
