//! Line-oriented file I/O with atomic writes
//!
//! Saves replace the whole file: lines go to a temp file next to the target,
//! which is then renamed over it.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::BankError;

/// Read every line of a file, failing if it doesn't exist
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, BankError> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| BankError::Persistence(format!("Failed to open {}: {}", path.display(), e)))?;

    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| BankError::Persistence(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write lines to a file atomically (write to temp, then rename)
pub fn write_lines_atomic<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<(), BankError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BankError::Persistence(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| BankError::Persistence(format!("Failed to create temp file: {}", e)))?;

    let written = write_all_lines(file, lines).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| BankError::Persistence(format!("Failed to rename temp file: {}", e)))
    });

    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}

fn write_all_lines(file: File, lines: &[String]) -> Result<(), BankError> {
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)
            .map_err(|e| BankError::Persistence(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| BankError::Persistence(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BankError::Persistence(format!("Failed to sync data: {}", e)))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_read_nonexistent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");

        assert!(matches!(read_lines(&path), Err(BankError::Persistence(_))));
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.txt");
        let data = lines(&["sohan,pass123,24000.0", "sharvari,abc123,14000.0"]);

        write_lines_atomic(&path, &data).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "sohan,pass123,24000.0\nsharvari,abc123,14000.0\n"
        );
        assert_eq!(read_lines(&path).unwrap(), data);
    }

    #[test]
    fn test_write_replaces_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.txt");

        write_lines_atomic(&path, &lines(&["a,1,1.0", "b,2,2.0", "c,3,3.0"])).unwrap();
        write_lines_atomic(&path, &lines(&["d,4,4.0"])).unwrap();

        assert_eq!(read_lines(&path).unwrap(), lines(&["d,4,4.0"]));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.txt");

        write_lines_atomic(&path, &lines(&["x,y,1.0"])).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("accounts.txt.tmp").exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        // A non-empty directory at the target path makes the rename fail
        let path = temp_dir.path().join("accounts.txt");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();

        assert!(matches!(
            write_lines_atomic(&path, &lines(&["x,y,1.0"])),
            Err(BankError::Persistence(_))
        ));
        assert!(!temp_dir.path().join("accounts.txt.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("accounts.txt");

        write_lines_atomic(&path, &[]).unwrap();
        assert!(path.exists());
    }
}
