//! Generation history: metadata about each generated password, never the
//! password itself.

mod file;

use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pass::Strength;

pub const FILE_NAME: &str = "password_history.json";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("cannot read history file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("history file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot write history file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// One generation event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub length: usize,
    pub strength_percent: f64,
}

impl HistoryEntry {
    /// Entry stamped with the current local time.
    pub fn now(length: usize, strength: Strength) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            length,
            strength_percent: strength.percent(),
        }
    }
}

/// JSON-array history log at a fixed location.
///
/// `append` rewrites the whole log: it loads every entry, pushes one, and
/// writes the array back through a temp file that is renamed into place.
/// Readers never see a half-written file, but two processes appending at
/// once still race and the last writer wins. Moving to one JSON object per
/// line, or taking an advisory lock around the cycle, would close that gap.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `password_history.json` beside the running executable, or in the
    /// working directory when the executable path is unknown.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every recorded entry in insertion order. A missing log is empty.
    pub fn load_all(&self) -> Result<Vec<HistoryEntry>> {
        let entries = file::read(&self.path)?;
        log::debug!("loaded {} history entries from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    /// Record a generation of `length` characters with the given strength.
    pub fn append(&self, length: usize, strength: Strength) -> Result<HistoryEntry> {
        let entry = HistoryEntry::now(length, strength);
        self.push(entry.clone())?;
        Ok(entry)
    }

    fn push(&self, entry: HistoryEntry) -> Result<()> {
        let mut entries = self.load_all()?;
        entries.push(entry);
        file::write(&self.path, &entries)?;
        log::debug!("history now has {} entries", entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::score;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> HistoryStore {
        HistoryStore::new(dir.path().join(FILE_NAME))
    }

    #[test]
    fn missing_log_is_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load_all().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn append_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.append(12, score("aaaaaaaaaaaa")).unwrap();
        let before = store.load_all().unwrap().len();
        let entry = store.append(20, score("Aa1!Aa1!Aa1!Aa1!Aa1!")).unwrap();
        let entries = store.load_all().unwrap();

        assert_eq!(entries.len(), before + 1);
        let last = entries.last().unwrap();
        assert_eq!(last, &entry);
        assert_eq!(last.length, 20);
        assert_eq!(last.strength_percent, 100.0);
        assert_eq!(entries[0].strength_percent, 45.0);
    }

    #[test]
    fn load_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.append(9, Strength::new(0.6)).unwrap();
        assert_eq!(store.load_all().unwrap(), store.load_all().unwrap());
    }

    #[test]
    fn timestamp_has_local_datetime_shape() {
        let entry = HistoryEntry::now(8, Strength::new(0.4));
        let ts = entry.timestamp.as_bytes();
        assert_eq!(ts.len(), 19);
        assert_eq!((ts[4], ts[7], ts[10], ts[13], ts[16]), (b'-', b'-', b' ', b':', b':'));
        assert!(chrono::NaiveDateTime::parse_from_str(&entry.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn reads_logs_written_by_earlier_versions() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            r#"[
  {
    "timestamp": "2024-03-01 09:15:42",
    "length": 16,
    "strength_percent": 85.0
  },
  {"timestamp": "2024-03-02 10:00:00", "length": 12, "strength_percent": 100}
]"#,
        )
        .unwrap();

        let entries = store.load_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, "2024-03-01 09:15:42");
        assert_eq!(entries[1].strength_percent, 100.0);

        store.append(10, Strength::new(0.45)).unwrap();
        assert_eq!(store.load_all().unwrap().len(), 3);
    }

    #[test]
    fn corrupt_log_is_an_error() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.load_all(), Err(HistoryError::Corrupt { .. })));
        assert!(matches!(
            store.append(12, Strength::new(1.0)),
            Err(HistoryError::Corrupt { .. })
        ));
        // The corrupt file is left untouched.
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{not json");
    }

    #[test]
    fn wrong_shape_is_corrupt() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"[{"timestamp": "x", "length": "long"}]"#).unwrap();
        assert!(matches!(store.load_all(), Err(HistoryError::Corrupt { .. })));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("nested/deeper").join(FILE_NAME));
        store.append(8, Strength::new(0.2)).unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn stored_file_uses_expected_field_names() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.append(14, Strength::new(0.85)).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let obj = value.as_array().unwrap()[0].as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["length", "strength_percent", "timestamp"]);
        assert_eq!(obj["length"], 14);
        assert_eq!(obj["strength_percent"], 85.0);
    }
}
