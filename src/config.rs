//! Runtime configuration for a game

use crate::game::{rows_for, supported_sizes};
use crate::wordlists::{DirectorySource, EmbeddedSource, WordListSource};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Word length used when none is given
pub const DEFAULT_WORD_SIZE: usize = 5;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "WORDLE_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported word size {size}; choose one of {supported}")]
    UnsupportedWordSize { size: usize, supported: String },
}

/// Settings for one `play` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_size: usize,
    /// Directory of `<n>.txt` word files; embedded lists when `None`
    pub wordlist_dir: Option<PathBuf>,
    /// NDJSON history file; history is not saved when `None`
    pub history_path: Option<PathBuf>,
    /// Seed for the secret draw; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_size: DEFAULT_WORD_SIZE,
            wordlist_dir: None,
            history_path: default_history_path(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Check the word size against the row table before any loading
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedWordSize` listing the playable sizes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if rows_for(self.word_size).is_some() {
            return Ok(());
        }
        let supported = supported_sizes()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(ConfigError::UnsupportedWordSize {
            size: self.word_size,
            supported,
        })
    }

    /// Word source selected by this configuration
    #[must_use]
    pub fn source(&self) -> Arc<dyn WordListSource> {
        match &self.wordlist_dir {
            Some(dir) => Arc::new(DirectorySource::new(dir)),
            None => Arc::new(EmbeddedSource),
        }
    }
}

/// `<data dir>/wordle_game/history.jsonl`, if the platform has a data dir
#[must_use]
pub fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("wordle_game").join("history.jsonl"))
}
