//! Saved defaults and history location.

mod file;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::history::HistoryStore;
use crate::pass::{DEFAULT_LENGTH, Preset};

pub use file::SettingsError;

/// Environment variable overriding the history file location.
pub const HISTORY_ENV: &str = "RANDPASS_HISTORY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pass_length: usize,
    pub preset: Preset,
    pub record_history: bool,
    pub history_path: Option<PathBuf>,
}

impl Settings {
    /// Saved settings, or defaults when none are saved.
    pub fn load_from_file() -> Result<Self, SettingsError> {
        file::load(&file::get_path())
    }

    /// Like `load_from_file`, but a broken file only costs a warning.
    pub fn load_or_default() -> Self {
        Self::load_from_file().unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Settings::default()
        })
    }

    pub fn save_to_file(&self) -> Result<PathBuf, SettingsError> {
        let path = file::get_path();
        file::save(&path, self)?;
        Ok(path)
    }

    /// History store at the saved or environment location.
    pub fn history_store(&self) -> HistoryStore {
        self.history_store_with(None)
    }

    /// Resolve the history location, first match wins: `flag`, then
    /// `RANDPASS_HISTORY`, then the saved path, then beside the executable.
    pub fn history_store_with(&self, flag: Option<PathBuf>) -> HistoryStore {
        let env = std::env::var_os(HISTORY_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        HistoryStore::new(resolve_history_path(flag, env, self.history_path.clone()))
    }
}

fn resolve_history_path(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    saved: Option<PathBuf>,
) -> PathBuf {
    flag.or(env)
        .or(saved)
        .unwrap_or_else(HistoryStore::default_path)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            preset: Preset::Strong,
            record_history: true,
            history_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::FILE_NAME;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.pass_length, 12);
        assert_eq!(s.preset, Preset::Strong);
        assert!(s.record_history);
        assert!(s.history_path.is_none());
    }

    #[test]
    fn flag_wins_over_env_and_saved() {
        let path = resolve_history_path(
            Some(PathBuf::from("/a/h.json")),
            Some(PathBuf::from("/b/h.json")),
            Some(PathBuf::from("/c/h.json")),
        );
        assert_eq!(path, PathBuf::from("/a/h.json"));
    }

    #[test]
    fn env_wins_over_saved() {
        let path = resolve_history_path(
            None,
            Some(PathBuf::from("/b/h.json")),
            Some(PathBuf::from("/c/h.json")),
        );
        assert_eq!(path, PathBuf::from("/b/h.json"));
    }

    #[test]
    fn saved_path_used_last() {
        let path = resolve_history_path(None, None, Some(PathBuf::from("/c/h.json")));
        assert_eq!(path, PathBuf::from("/c/h.json"));
    }

    #[test]
    fn default_path_sits_beside_executable() {
        let path = resolve_history_path(None, None, None);
        assert!(path.ends_with(FILE_NAME));
    }
}
