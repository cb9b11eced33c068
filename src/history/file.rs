//! History file persistence.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::{HistoryEntry, HistoryError, Result};

pub fn read(path: &Path) -> Result<Vec<HistoryEntry>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(HistoryError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            HistoryError::Read {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            HistoryError::Corrupt {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Replace the file with `entries`, via a sibling temp file and rename.
pub fn write(path: &Path, entries: &[HistoryEntry]) -> Result<()> {
    let write_err = |source: std::io::Error| HistoryError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(write_err)?;

    let temp = NamedTempFile::new_in(parent).map_err(write_err)?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        serde_json::to_writer_pretty(&mut writer, entries)
            .map_err(|e| write_err(e.into()))?;
        writer.flush().map_err(write_err)?;
    }
    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
