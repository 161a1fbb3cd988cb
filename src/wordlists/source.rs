//! Backing stores for word lists
//!
//! A [`WordListSource`] supplies the raw words for one length. Loading may
//! touch the filesystem, so it is async.

use super::WordListError;
use super::embedded::embedded_for;
use super::loader::{parse_words, words_from_slice};
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

/// Raw words for one length, as returned by a source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceWords {
    /// Every acceptable guess
    pub allowed: Vec<String>,
    /// Words eligible as the secret; `None` means every allowed word is
    pub secrets: Option<Vec<String>>,
}

/// Supplies words for a requested length
#[async_trait]
pub trait WordListSource: Send + Sync {
    /// Load the words for `length`
    ///
    /// Returns `Ok(None)` when the source has no list for that length.
    async fn load_words_for_length(&self, length: usize)
    -> Result<Option<SourceWords>, WordListError>;
}

/// Lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

#[async_trait]
impl WordListSource for EmbeddedSource {
    async fn load_words_for_length(
        &self,
        length: usize,
    ) -> Result<Option<SourceWords>, WordListError> {
        Ok(embedded_for(length).map(|list| SourceWords {
            allowed: words_from_slice(list.allowed, length),
            secrets: Some(words_from_slice(list.secrets, length)),
        }))
    }
}

/// Lists read from a directory
///
/// For length `n` it reads `<dir>/<n>.txt` as the allowed words and, if
/// present, `<dir>/<n>.secrets.txt` as the secret subset.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_optional(path: &Path) -> Result<Option<String>, WordListError> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(WordListError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[async_trait]
impl WordListSource for DirectorySource {
    async fn load_words_for_length(
        &self,
        length: usize,
    ) -> Result<Option<SourceWords>, WordListError> {
        let allowed_path = self.dir.join(format!("{length}.txt"));
        let Some(allowed) = Self::read_optional(&allowed_path).await? else {
            log::debug!("no word list at {}", allowed_path.display());
            return Ok(None);
        };

        let secrets_path = self.dir.join(format!("{length}.secrets.txt"));
        let secrets = Self::read_optional(&secrets_path)
            .await?
            .map(|content| parse_words(&content, length));

        Ok(Some(SourceWords {
            allowed: parse_words(&allowed, length),
            secrets,
        }))
    }
}
