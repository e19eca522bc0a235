//! Storage initialization
//!
//! Writes the demo accounts on first run, when no account store exists yet.

use tracing::info;

use crate::error::BankResult;

use super::store::AccountStore;

/// Demo accounts written to a fresh store: (username, password, balance)
pub const SEED_ACCOUNTS: [(&str, &str, &str); 5] = [
    ("sohan", "pass123", "24000.0"),
    ("sharvari", "abc123", "14000.0"),
    ("basanth", "password1", "21000.0"),
    ("darshan", "neha@123", "8000.0"),
    ("prahllad", "java456", "10000.0"),
];

/// Populate the store with the seed accounts if it does not exist
///
/// Returns `true` if the seed was written. An existing store is never touched.
pub fn ensure_seed(store: &dyn AccountStore) -> BankResult<bool> {
    if store.exists() {
        return Ok(false);
    }

    let lines: Vec<String> = SEED_ACCOUNTS
        .iter()
        .map(|(user, pass, balance)| format!("{},{},{}", user, pass, balance))
        .collect();
    store.write_lines(&lines)?;

    info!(store = %store.describe(), accounts = lines.len(), "seeded account store");
    Ok(true)
}
