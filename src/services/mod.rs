//! Business logic layer
//!
//! Services borrow the [`Storage`](crate::storage::Storage) state object and
//! expose the operations the CLI drives.

pub mod account;
pub mod ledger;

pub use account::AccountService;
pub use ledger::{HistoryOrder, HistoryPage, HistoryQuery, KindFilter, LedgerService};
