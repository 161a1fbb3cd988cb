//! Destinations for finished-game records

use super::HistoryRecord;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed history record on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode history record: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Receives exactly one record per completed game
pub trait HistorySink {
    /// Store a finished game
    ///
    /// # Errors
    ///
    /// Returns a `HistoryError` if the record could not be persisted.
    fn add_entry(&mut self, record: HistoryRecord) -> Result<(), HistoryError>;
}

/// Keeps records in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryRecord>,
}

impl MemoryHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryRecord] {
        &self.entries
    }
}

impl HistorySink for MemoryHistory {
    fn add_entry(&mut self, record: HistoryRecord) -> Result<(), HistoryError> {
        self.entries.push(record);
        Ok(())
    }
}

/// Append-only NDJSON history file
///
/// Each call writes exactly one JSON object followed by a newline. The file
/// and its parent directory are created on first write.
#[derive(Debug, Clone)]
pub struct JsonlHistory {
    path: PathBuf,
}

impl JsonlHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in the file
    ///
    /// A missing file is an empty history. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns `Io` on read failure and `Json` for the first malformed line.
    pub fn read_all(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line).map_err(|source| HistoryError::Json {
                    line: i + 1,
                    source,
                })
            })
            .collect()
    }
}

impl HistorySink for JsonlHistory {
    fn add_entry(&mut self, record: HistoryRecord) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut buf = serde_json::to_vec(&record).map_err(HistoryError::Encode)?;
        buf.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&buf)?;
        file.flush()?;

        log::debug!("appended history record to {}", self.path.display());
        Ok(())
    }
}
