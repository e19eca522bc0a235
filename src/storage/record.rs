//! Codec for the `username,password,balance` line format
//!
//! Fields are separated by single commas with no quoting or escaping. A
//! record must have exactly three fields, a non-empty username and a balance
//! that parses as [`Money`].

use crate::error::{BankError, BankResult};
use crate::models::{Account, Money};

/// Parse one line of the account file; `line` is 1-based and used in errors
pub fn parse_record(text: &str, line: usize) -> BankResult<Account> {
    let malformed = |reason: String| BankError::MalformedRecord { line, reason };

    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != 3 {
        return Err(malformed(format!(
            "expected 3 comma-separated fields, found {}",
            fields.len()
        )));
    }

    let (username, password, balance) = (fields[0], fields[1], fields[2]);
    if username.is_empty() {
        return Err(malformed("empty username".into()));
    }

    let balance = Money::parse_literal(balance).map_err(|e| malformed(e.to_string()))?;

    Ok(Account::new(username, password, balance))
}

/// Render an account as one line of the account file
pub fn format_record(account: &Account) -> String {
    account.to_record()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_line() {
        let account = parse_record("sohan,pass123,24000.0", 1).unwrap();
        assert_eq!(account.username(), "sohan");
        assert!(account.authenticate("pass123"));
        assert_eq!(account.balance(), Money::from_units(24000));
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_parse_keeps_special_characters_in_password() {
        let account = parse_record("darshan,neha@123,8000.0", 4).unwrap();
        assert!(account.authenticate("neha@123"));
    }

    #[test]
    fn test_parse_allows_empty_password() {
        let account = parse_record("guest,,0.0", 1).unwrap();
        assert!(account.authenticate(""));
    }

    #[test]
    fn test_format_matches_input() {
        for line in ["sohan,pass123,24000.0", "x,y,0.05", "long,pw,123456.75"] {
            assert_eq!(format_record(&parse_record(line, 1).unwrap()), line);
        }
    }

    #[test]
    fn test_missing_field() {
        let err = parse_record("sohan,pass123", 2).unwrap_err();
        match err {
            BankError::MalformedRecord { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extra_field() {
        assert!(matches!(
            parse_record("a,b,c,1.0", 7),
            Err(BankError::MalformedRecord { line: 7, .. })
        ));
    }

    #[test]
    fn test_non_numeric_balance() {
        let err = parse_record("sohan,pass123,lots", 3).unwrap_err();
        assert!(err.to_string().contains("Invalid money format"));
    }

    #[test]
    fn test_currency_prefix_in_balance_rejected() {
        for line in ["sohan,pw,Rs.5", "sohan,pw, 5.0"] {
            assert!(matches!(
                parse_record(line, 1),
                Err(BankError::MalformedRecord { line: 1, .. })
            ));
        }
    }

    #[test]
    fn test_empty_username() {
        assert!(matches!(
            parse_record(",pass,1.0", 1),
            Err(BankError::MalformedRecord { .. })
        ));
    }
}
