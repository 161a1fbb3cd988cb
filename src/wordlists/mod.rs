//! Word lists for the game
//!
//! Embedded lists for every supported length, async sources, the resolved
//! [`WordList`] and a per-length cache.

mod embedded;
mod list;
pub mod loader;
mod manager;
mod source;

use std::path::PathBuf;
use thiserror::Error;

pub use embedded::{EMBEDDED, EmbeddedList, embedded_for};
pub use list::WordList;
pub use manager::WordListManager;
pub use source::{DirectorySource, EmbeddedSource, SourceWords, WordListSource};

/// Failures that prevent a game from starting
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("no word list for {0}-letter words")]
    UnsupportedLength(usize),
    #[error("no secret words available for {0}-letter games")]
    EmptyList(usize),
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::supported_sizes;

    #[test]
    fn embedded_lists_match_supported_sizes() {
        let lengths: Vec<usize> = EMBEDDED.iter().map(|list| list.length).collect();
        assert_eq!(lengths, supported_sizes().collect::<Vec<_>>());
    }

    #[test]
    fn embedded_words_have_declared_length() {
        for list in EMBEDDED {
            for &word in list.allowed.iter().chain(list.secrets) {
                assert_eq!(word.len(), list.length, "word '{word}'");
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn embedded_secrets_subset_of_allowed() {
        for list in EMBEDDED {
            let allowed: std::collections::HashSet<_> = list.allowed.iter().collect();
            for secret in list.secrets {
                assert!(allowed.contains(&secret), "secret '{secret}' not allowed");
            }
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            WordListError::UnsupportedLength(9).to_string(),
            "no word list for 9-letter words"
        );
        assert_eq!(
            WordListError::EmptyList(5).to_string(),
            "no secret words available for 5-letter games"
        );
    }
}
