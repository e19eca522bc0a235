//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths of the currency unit (i64) so ledger
//! arithmetic is exact. The textual form is the decimal literal used by the
//! account file: at least one fractional digit, trailing zeros trimmed
//! (`24000.0`, `150.5`, `99.25`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use bank_cli::models::Money;
    /// let amount = Money::from_cents(1050); // 10.5
    /// assert_eq!(amount.to_string(), "10.5");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts `"24000.0"`, `"150.5"`, `"99.25"`, `"10"`, `"-3.5"` and an optional
    /// `Rs.` prefix. Digits past the second fractional place must be zero.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (negative, rest) = match original.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, original),
        };
        let rest = rest.strip_prefix("Rs.").unwrap_or(rest).trim_start();

        let (whole, fraction) = rest.split_once('.').unwrap_or((rest, ""));
        if whole.is_empty()
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let (kept, dropped) = fraction.split_at(fraction.len().min(2));
        if dropped.bytes().any(|b| b != b'0') {
            return Err(MoneyParseError::TooPrecise(original.to_string()));
        }

        let units: i64 = whole.parse().map_err(|_| invalid())?;
        let cents_part: i64 = match kept.len() {
            0 => 0,
            1 => kept.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => kept.parse().map_err(|_| invalid())?,
        };

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_part))
            .ok_or_else(|| MoneyParseError::OutOfRange(original.to_string()))?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Parse the bare decimal literal stored in the account file
    ///
    /// Unlike [`Money::parse`], a currency prefix or any whitespace is
    /// rejected, so a loaded record renders back to the same text.
    pub fn parse_literal(s: &str) -> Result<Self, MoneyParseError> {
        if s.contains(char::is_whitespace) || s.contains("Rs.") {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        Self::parse(s)
    }

    /// Format with a currency symbol, e.g. `Rs.24000.0`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, self.abs_string())
        } else {
            format!("{}{}", symbol, self.abs_string())
        }
    }

    /// Add two amounts, `None` if the result does not fit
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Subtract `other`, `None` if the result does not fit
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Sum a sequence of amounts, `None` on overflow
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |total, amount| total.checked_add(amount))
    }

    fn abs_string(&self) -> String {
        let units = self.units().abs();
        let part = self.cents_part();
        if part % 10 == 0 {
            format!("{}.{}", units, part / 10)
        } else {
            format!("{}.{:02}", units, part)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.abs_string())
        } else {
            f.write_str(&self.abs_string())
        }
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_string()
    }
}

impl TryFrom<String> for Money {
    type Error = MoneyParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Money::parse(&s)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            Self::TooPrecise(s) => write!(f, "More than two decimal places: {}", s),
            Self::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
