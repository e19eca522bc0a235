//! Account CLI commands
//!
//! Non-interactive account management.

use clap::Subcommand;

use crate::display::account::{format_account_details, format_account_list};
use crate::error::{BankError, BankResult};
use crate::services::AccountService;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Username (must be unique)
        username: String,
        /// Password; prompted for with hidden input when omitted
        #[arg(short, long)]
        password: Option<String>,
    },
    /// List all accounts
    List,
    /// Show account details
    Show {
        /// Username
        username: String,
    },
}

/// Handle an account command
pub fn handle_account_command(storage: &mut Storage, cmd: AccountCommands) -> BankResult<()> {
    let symbol = storage.settings().currency_symbol.clone();
    let mut service = AccountService::new(storage);

    match cmd {
        AccountCommands::Create { username, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt_password("Password: ")?,
            };

            let account = service.create(&username, &password)?;
            println!(
                "Account created successfully with {} balance.",
                account.balance().format_with_symbol(&symbol)
            );
        }

        AccountCommands::List => {
            print!("{}", format_account_list(&service.list(), &symbol));
        }

        AccountCommands::Show { username } => {
            let account = service
                .find(&username)
                .ok_or_else(|| BankError::AccountNotFound(username.clone()))?;
            print!("{}", format_account_details(account, &symbol));
        }
    }

    Ok(())
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> BankResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| BankError::Io(format!("Failed to read password: {}", e)))
}
