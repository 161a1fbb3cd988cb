//! End-of-game snapshot

use crate::core::Pattern;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Immutable record of one finished game
///
/// `row_texts` and `grid` always have `rows` entries; rows the player never
/// reached hold an empty string and an empty pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub rows: usize,
    pub word_size: usize,
    pub row_texts: Vec<String>,
    pub grid: Vec<Pattern>,
    pub secret: String,
    pub completed_at: DateTime<Local>,
}

impl HistoryRecord {
    /// Number of guesses the player submitted
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.row_texts.iter().take_while(|t| !t.is_empty()).count()
    }

    /// Whether the last submitted guess matched the secret
    #[must_use]
    pub fn won(&self) -> bool {
        self.guesses_used()
            .checked_sub(1)
            .and_then(|last| self.grid.get(last))
            .is_some_and(Pattern::is_perfect)
    }
}
