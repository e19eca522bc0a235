//! Interactive menu
//!
//! A numbered menu read line by line from any `BufRead` and written to any
//! `Write`, so the binary runs it on stdin/stdout and tests run it on
//! buffers. End of input is treated as Exit.

use std::io::{BufRead, Write};

use crate::display::{format_balance, format_history_page, format_transaction_history};
use crate::error::{BankError, BankResult};
use crate::models::Money;
use crate::services::{AccountService, HistoryOrder, HistoryQuery, KindFilter, LedgerService};
use crate::storage::Storage;

/// The top-level and logged-in menus
pub struct Menu<'a, R, W> {
    storage: &'a mut Storage,
    input: R,
    output: W,
    symbol: String,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(storage: &'a mut Storage, input: R, output: W) -> Self {
        let symbol = storage.settings().currency_symbol.clone();
        Self {
            storage,
            input,
            output,
            symbol,
        }
    }

    /// Run until the user exits or input ends; saves on the way out
    pub fn run(&mut self) -> BankResult<()> {
        loop {
            writeln!(self.output, "\n--- Welcome to Online Banking System ---")?;
            writeln!(self.output, "1. Create Account")?;
            writeln!(self.output, "2. Login")?;
            writeln!(self.output, "3. Exit")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return self.exit();
            };

            match choice.trim() {
                "1" => self.create_account()?,
                "2" => self.login()?,
                "3" => return self.exit(),
                _ => writeln!(self.output, "Invalid choice!")?,
            }
        }
    }

    fn create_account(&mut self) -> BankResult<()> {
        let Some(username) = self.prompt("Enter username: ")? else {
            return Ok(());
        };
        let username = username.trim().to_string();

        if AccountService::new(self.storage).exists(&username) {
            writeln!(self.output, "Username already exists.")?;
            return Ok(());
        }

        let Some(password) = self.prompt("Enter password: ")? else {
            return Ok(());
        };

        match AccountService::new(self.storage).create(&username, password.trim()) {
            Ok(account) => writeln!(
                self.output,
                "Account created successfully with {} balance.",
                account.balance().format_with_symbol(&self.symbol)
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn login(&mut self) -> BankResult<()> {
        let Some(username) = self.prompt("Enter username: ")? else {
            return Ok(());
        };
        let Some(password) = self.prompt("Enter password: ")? else {
            return Ok(());
        };

        let authenticated = AccountService::new(self.storage)
            .login(&username, &password)
            .is_ok();

        if authenticated {
            writeln!(self.output, "Login successful!")?;
            self.session(&username)
        } else {
            writeln!(self.output, "{}.", BankError::InvalidCredentials)?;
            Ok(())
        }
    }

    fn session(&mut self, username: &str) -> BankResult<()> {
        loop {
            writeln!(self.output, "\n--- Banking Menu ---")?;
            writeln!(self.output, "1. Check Balance")?;
            writeln!(self.output, "2. Deposit")?;
            writeln!(self.output, "3. Withdraw")?;
            writeln!(self.output, "4. Transfer Money")?;
            writeln!(self.output, "5. Transaction History")?;
            writeln!(self.output, "6. Logout")?;
            writeln!(self.output, "7. Search Transactions")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return self.logout();
            };

            match choice.trim() {
                "1" => self.check_balance(username)?,
                "2" => self.deposit(username)?,
                "3" => self.withdraw(username)?,
                "4" => self.transfer(username)?,
                "5" => self.history(username)?,
                "6" => return self.logout(),
                "7" => self.search(username)?,
                _ => writeln!(self.output, "Invalid option.")?,
            }
        }
    }

    fn check_balance(&mut self, username: &str) -> BankResult<()> {
        match AccountService::new(self.storage).balance(username) {
            Ok(balance) => writeln!(self.output, "{}", format_balance(balance, &self.symbol))?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn deposit(&mut self, username: &str) -> BankResult<()> {
        let Some(amount) = self.read_amount("Enter amount to deposit: ")? else {
            return Ok(());
        };

        match LedgerService::new(self.storage).deposit(username, amount) {
            Ok(_) => writeln!(self.output, "Deposit successful.")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn withdraw(&mut self, username: &str) -> BankResult<()> {
        let Some(amount) = self.read_amount("Enter amount to withdraw: ")? else {
            return Ok(());
        };

        match LedgerService::new(self.storage).withdraw(username, amount) {
            Ok(_) => writeln!(self.output, "Withdrawal successful.")?,
            Err(BankError::InsufficientFunds { .. }) => {
                writeln!(self.output, "Insufficient balance.")?
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn transfer(&mut self, username: &str) -> BankResult<()> {
        let Some(recipient) = self.prompt("Enter recipient username: ")? else {
            return Ok(());
        };
        let recipient = recipient.trim().to_string();

        if !AccountService::new(self.storage).exists(&recipient) {
            writeln!(self.output, "Recipient account not found.")?;
            return Ok(());
        }

        let Some(amount) = self.read_amount("Enter amount to transfer: ")? else {
            return Ok(());
        };

        match LedgerService::new(self.storage).transfer(username, &recipient, amount) {
            Ok(_) => writeln!(self.output, "Transfer successful to {}", recipient)?,
            Err(BankError::InsufficientFunds { .. }) => {
                writeln!(self.output, "Transfer failed. Check balance.")?
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn history(&mut self, username: &str) -> BankResult<()> {
        let text = match LedgerService::new(self.storage).history(username) {
            Ok(transactions) => format_transaction_history(transactions, &self.symbol),
            Err(e) => format!("{}\n", e),
        };
        write!(self.output, "{}", text)?;
        Ok(())
    }

    fn search(&mut self, username: &str) -> BankResult<()> {
        let Some(search) = self.prompt("Search text (blank for all): ")? else {
            return Ok(());
        };
        let Some(kind) = self.prompt(
            "Type (all, deposit, withdraw, transfer-sent, transfer-received): ",
        )?
        else {
            return Ok(());
        };
        let Some(order) = self.prompt("Order (newest, oldest): ")? else {
            return Ok(());
        };

        let kind = match kind.trim() {
            "" | "all" => None,
            other => match other.parse::<KindFilter>() {
                Ok(kind) => Some(kind),
                Err(_) => {
                    writeln!(self.output, "Invalid option.")?;
                    return Ok(());
                }
            },
        };
        let order = match order.trim() {
            "" => HistoryOrder::default(),
            other => match other.parse::<HistoryOrder>() {
                Ok(order) => order,
                Err(_) => {
                    writeln!(self.output, "Invalid option.")?;
                    return Ok(());
                }
            },
        };

        let query = HistoryQuery {
            search: Some(search).filter(|s| !s.trim().is_empty()),
            kind,
            order,
        };
        let text = match LedgerService::new(self.storage).search(username, &query) {
            Ok(page) => format_history_page(&page, &self.symbol),
            Err(e) => format!("{}\n", e),
        };
        write!(self.output, "{}", text)?;
        Ok(())
    }

    fn logout(&mut self) -> BankResult<()> {
        self.save()?;
        writeln!(self.output, "Logged out.")?;
        Ok(())
    }

    fn exit(&mut self) -> BankResult<()> {
        self.save()?;
        writeln!(self.output, "Thank you for using Online Banking System!")?;
        Ok(())
    }

    fn save(&mut self) -> BankResult<()> {
        if !self.storage.persist() {
            writeln!(self.output, "Error saving accounts.")?;
        }
        Ok(())
    }

    /// Read an amount; `None` on end of input or unparseable text
    fn read_amount(&mut self, label: &str) -> BankResult<Option<Money>> {
        let Some(text) = self.prompt(label)? else {
            return Ok(None);
        };

        match Money::parse(&text) {
            Ok(amount) => Ok(Some(amount)),
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                Ok(None)
            }
        }
    }

    /// Print a prompt and read one line without its line ending
    fn prompt(&mut self, label: &str) -> BankResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
