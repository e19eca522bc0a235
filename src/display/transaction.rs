//! Transaction display formatting

use crate::models::Transaction;
use crate::services::HistoryPage;

/// Format a single ledger entry, e.g. `Deposit: Rs.500.0 on 2026-01-01 10:00:00`
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{}: {} on {}",
        txn.kind(),
        txn.amount().format_with_symbol(symbol),
        txn.timestamp().format("%Y-%m-%d %H:%M:%S")
    )
}

/// Format a whole ledger, oldest first
pub fn format_transaction_history(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let mut output = String::new();
    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }
    output
}

/// Format a filtered ledger with a `Showing N of M` summary line
pub fn format_history_page(page: &HistoryPage<'_>, symbol: &str) -> String {
    if page.total == 0 {
        return "No transactions yet.\n".to_string();
    }
    if page.shown.is_empty() {
        return "No matching transactions.\n".to_string();
    }

    let mut output = String::new();
    for txn in &page.shown {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    let net = match page.net {
        Some(net) => net.format_with_symbol(symbol),
        None => "out of range".to_string(),
    };
    output.push_str(&format!(
        "Showing {} of {} transactions, net {}\n",
        page.shown.len(),
        page.total,
        net
    ));
    output
}
