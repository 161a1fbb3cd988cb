//! Resolved word list for a single length

use super::WordListError;
use super::source::{SourceWords, WordListSource};
use crate::game::rows_for;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Valid guesses and secret candidates of one length
///
/// Immutable after construction; share it between games with `Arc`.
#[derive(Debug, Clone)]
pub struct WordList {
    length: usize,
    valid: FxHashSet<String>,
    secrets: Vec<String>,
}

impl WordList {
    /// Load the list for `length` from `source`
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLength` if `length` has no row count or the source
    /// has no words for it, and propagates source I/O failures.
    pub async fn resolve(
        source: &dyn WordListSource,
        length: usize,
    ) -> Result<Self, WordListError> {
        if rows_for(length).is_none() {
            return Err(WordListError::UnsupportedLength(length));
        }

        let words = source
            .load_words_for_length(length)
            .await?
            .ok_or(WordListError::UnsupportedLength(length))?;

        let list = Self::from_source_words(length, words)?;
        log::info!(
            "resolved {length}-letter word list: {} valid, {} secrets",
            list.len(),
            list.secret_count()
        );
        Ok(list)
    }

    /// Build a list from raw words
    ///
    /// Words are lowercased; entries of the wrong length or with non-letters
    /// are dropped. When `secrets` is `None` every valid word is a secret
    /// candidate. Secret candidates are always accepted as guesses.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLength` if `length` has no row count.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = WordList::from_words(4, ["LAMP", "moon", "toolong"], None::<Vec<&str>>).unwrap();
    /// assert!(list.is_valid("Lamp"));
    /// assert!(!list.is_valid("toolong"));
    /// assert_eq!(list.secret_count(), 2);
    /// ```
    pub fn from_words<I, S, J, T>(
        length: usize,
        allowed: I,
        secrets: Option<J>,
    ) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        J: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let words = SourceWords {
            allowed: allowed.into_iter().map(|w| w.as_ref().to_string()).collect(),
            secrets: secrets.map(|s| s.into_iter().map(|w| w.as_ref().to_string()).collect()),
        };
        Self::from_source_words(length, words)
    }

    fn from_source_words(length: usize, words: SourceWords) -> Result<Self, WordListError> {
        if rows_for(length).is_none() {
            return Err(WordListError::UnsupportedLength(length));
        }

        let normalize = |w: &String| -> Option<String> {
            let w = w.trim();
            (w.chars().count() == length && w.chars().all(|c| c.is_ascii_alphabetic()))
                .then(|| w.to_ascii_lowercase())
        };

        let mut valid: FxHashSet<String> = words.allowed.iter().filter_map(normalize).collect();

        let secrets: Vec<String> = match words.secrets {
            Some(secrets) => {
                let mut seen = FxHashSet::default();
                secrets
                    .iter()
                    .filter_map(normalize)
                    .filter(|w| seen.insert(w.clone()))
                    .collect()
            }
            None => {
                let mut all: Vec<String> = valid.iter().cloned().collect();
                all.sort_unstable();
                all
            }
        };
        valid.extend(secrets.iter().cloned());

        Ok(Self {
            length,
            valid,
            secrets,
        })
    }

    /// Word length every entry has
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of valid guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.valid.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }

    /// Number of words eligible as the secret
    #[must_use]
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }

    /// Case-insensitive membership test against all valid guesses
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.valid.contains(&word.to_ascii_lowercase())
    }

    /// Whether `word` could have been drawn as the secret
    #[must_use]
    pub fn is_secret_candidate(&self, word: &str) -> bool {
        let word = word.to_ascii_lowercase();
        self.secrets.iter().any(|s| *s == word)
    }

    /// Draw a uniformly random secret using the thread-local RNG
    ///
    /// # Errors
    ///
    /// Returns `EmptyList` if there are no secret candidates.
    pub fn random_secret(&self) -> Result<&str, WordListError> {
        self.random_secret_with(&mut rand::rng())
    }

    /// Draw a uniformly random secret from `rng`
    ///
    /// # Errors
    ///
    /// Returns `EmptyList` if there are no secret candidates.
    pub fn random_secret_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, WordListError> {
        self.secrets
            .choose(rng)
            .map(String::as_str)
            .ok_or(WordListError::EmptyList(self.length))
    }
}
