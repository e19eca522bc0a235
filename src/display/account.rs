//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{Account, Money};

/// The line shown for "Check Balance"
pub fn format_balance(balance: Money, symbol: &str) -> String {
    format!("Your balance is: {}", balance.format_with_symbol(symbol))
}

/// Format a list of accounts with balances as a table
pub fn format_account_list(accounts: &[&Account], symbol: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.username().len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}\n",
        "Username",
        "Balance",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->14}\n",
        "",
        "",
        name_width = name_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<name_width$}  {:>14}\n",
            account.username(),
            account.balance().format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    let total = match Money::checked_sum(accounts.iter().map(|a| a.balance())) {
        Some(total) => total.format_with_symbol(symbol),
        None => "out of range".to_string(),
    };
    output.push_str(&format!(
        "{:-<name_width$}  {:->14}\n",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<name_width$}  {:>14}\n",
        "TOTAL",
        total,
        name_width = name_width,
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Account: {}\n", account.username()));
    output.push_str(&format!(
        "  Balance:        {}\n",
        account.balance().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Transactions:   {}\n",
        account.transactions().len()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance() {
        assert_eq!(
            format_balance(Money::from_units(19000), "Rs."),
            "Your balance is: Rs.19000.0"
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_account_list(&[], "Rs."), "No accounts found.\n");
    }

    #[test]
    fn test_list_includes_rows_and_total() {
        let a = Account::new("sohan", "pass123", Money::from_units(24000));
        let b = Account::new("sharvari", "abc123", Money::from_units(14000));
        let output = format_account_list(&[&a, &b], "Rs.");

        assert!(output.contains("sohan"));
        assert!(output.contains("Rs.24000.0"));
        assert!(output.contains("Rs.14000.0"));
        assert!(output.contains("Rs.38000.0"));
        assert!(!output.contains("pass123"));
    }

    #[test]
    fn test_total_out_of_range() {
        let a = Account::new("a", "x", Money::from_cents(i64::MAX));
        let b = Account::new("b", "y", Money::from_cents(1));
        let output = format_account_list(&[&a, &b], "Rs.");

        assert!(output.lines().last().unwrap().ends_with("out of range"));
    }

    #[test]
    fn test_details() {
        let account = Account::new("basanth", "password1", Money::from_units(21000));
        let output = format_account_details(&account, "Rs.");
        assert!(output.starts_with("Account: basanth\n"));
        assert!(output.contains("Rs.21000.0"));
        assert!(output.contains("Transactions:   0"));
    }
}
