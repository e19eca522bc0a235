use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use bank_cli::cli::{handle_account_command, AccountCommands, Menu};
use bank_cli::config::{paths::BankPaths, settings::Settings};
use bank_cli::storage::{ensure_seed, FileStore, Storage};

#[derive(Parser)]
#[command(
    name = "bank",
    version,
    about = "Console banking simulator",
    long_about = "bank-cli is a single-user console banking simulator. It keeps \
                  accounts and balances in a plain text file and tracks each \
                  account's transactions for the current session."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    #[command(alias = "ui")]
    Menu,

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Write the demo accounts and default settings if missing
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    bank_cli::logging::init();
    let cli = Cli::parse();

    let paths = BankPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Account(cmd)) => {
            let mut storage = Storage::from_paths(&paths, settings)?;
            handle_account_command(&mut storage, cmd)?;
        }
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            let seeded = ensure_seed(&FileStore::new(paths.accounts_file()))?;
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            if seeded {
                println!("Created demo accounts at: {}", paths.accounts_file().display());
            } else {
                println!("Accounts already exist at: {}", paths.accounts_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("bank-cli Configuration");
            println!("======================");
            println!("Data directory:  {}", paths.base_dir().display());
            println!("Accounts file:   {}", paths.accounts_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Starting balance:  {}", settings.starting_balance);
            println!("  Transfer style:    {:?}", settings.transfer_style);
            println!("  Malformed records: {:?}", settings.malformed_records);
        }
        None | Some(Commands::Menu) => {
            let mut storage = Storage::from_paths(&paths, settings)?;
            let stdin = io::stdin();
            Menu::new(&mut storage, stdin.lock(), io::stdout()).run()?;
        }
    }

    Ok(())
}
