//! Settings file persistence.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Settings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub fn save(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let io_err = |source: std::io::Error| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut data = serde_json::to_string_pretty(settings).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    data.push('\n');
    fs::write(path, data).map_err(io_err)
}

/// Missing file means defaults. Fields absent from the file keep their
/// default values.
pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if data.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_json::from_str(&data).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/randpass/settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::Preset;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg/randpass/settings.json");
        let settings = Settings {
            pass_length: 24,
            preset: Preset::Max,
            record_history: false,
            history_path: Some(PathBuf::from("/tmp/history.json")),
        };

        save(&path, &settings).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
        assert!(fs::read_to_string(&path).unwrap().contains("\"preset\": \"max\""));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"pass_length": 30}"#).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.pass_length, 30);
        assert_eq!(loaded.preset, Preset::Strong);
        assert!(loaded.record_history);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "74,19,false,false").unwrap();
        assert!(matches!(load(&path), Err(SettingsError::Parse { .. })));
    }
}
