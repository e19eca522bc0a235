//! Backends that hold the account records
//!
//! [`FileStore`] is what the binary uses. [`MemoryStore`] keeps the lines in
//! memory and can be told to fail, so directory and service code can be
//! exercised without touching the filesystem.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::{BankError, BankResult};

use super::file_io::{read_lines, write_lines_atomic};

/// A place account records are read from and written to
pub trait AccountStore {
    /// Whether the store has ever been written
    fn exists(&self) -> bool;

    /// All stored lines, in file order
    fn read_lines(&self) -> BankResult<Vec<String>>;

    /// Replace the stored contents with `lines`
    fn write_lines(&self, lines: &[String]) -> BankResult<()>;

    /// Human-readable location, for log messages
    fn describe(&self) -> String;
}

impl<S: AccountStore + ?Sized> AccountStore for Rc<S> {
    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn read_lines(&self) -> BankResult<Vec<String>> {
        (**self).read_lines()
    }

    fn write_lines(&self, lines: &[String]) -> BankResult<()> {
        (**self).write_lines(lines)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Account records in a text file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl AccountStore for FileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_lines(&self) -> BankResult<Vec<String>> {
        read_lines(&self.path)
    }

    fn write_lines(&self, lines: &[String]) -> BankResult<()> {
        write_lines_atomic(&self.path, lines)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Account records held in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    lines: RefCell<Option<Vec<String>>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    /// An empty store that reports itself as absent
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds the given lines
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        store
            .lines
            .replace(Some(lines.into_iter().map(Into::into).collect()));
        store
    }

    /// Make subsequent reads fail with a persistence error
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make subsequent writes fail with a persistence error
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Current contents, or `None` if never written
    pub fn contents(&self) -> Option<Vec<String>> {
        self.lines.borrow().clone()
    }
}

impl AccountStore for MemoryStore {
    fn exists(&self) -> bool {
        self.lines.borrow().is_some()
    }

    fn read_lines(&self) -> BankResult<Vec<String>> {
        if self.fail_reads.get() {
            return Err(BankError::Persistence("simulated read failure".into()));
        }
        self.lines
            .borrow()
            .clone()
            .ok_or_else(|| BankError::Persistence("store has not been written".into()))
    }

    fn write_lines(&self, lines: &[String]) -> BankResult<()> {
        if self.fail_writes.get() {
            return Err(BankError::Persistence("simulated write failure".into()));
        }
        self.lines.replace(Some(lines.to_vec()));
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory store".to_string()
    }
}
