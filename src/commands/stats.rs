//! Stats command
//!
//! Summarizes finished games from the history file.

use crate::history::HistoryRecord;
use std::collections::BTreeMap;

/// Aggregate over a set of finished games
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HistoryStats {
    pub games: usize,
    pub wins: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Winning games keyed by guesses used
    pub distribution: BTreeMap<usize, usize>,
    /// Games per word size
    pub by_word_size: BTreeMap<usize, usize>,
}

impl HistoryStats {
    /// Summarize records in the order they were played
    #[must_use]
    pub fn from_records(records: &[HistoryRecord]) -> Self {
        let mut stats = Self::default();
        let mut streak = 0;

        for record in records {
            stats.games += 1;
            *stats.by_word_size.entry(record.word_size).or_insert(0) += 1;

            if record.won() {
                stats.wins += 1;
                streak += 1;
                stats.max_streak = stats.max_streak.max(streak);
                *stats.distribution.entry(record.guesses_used()).or_insert(0) += 1;
            } else {
                streak = 0;
            }
        }

        stats.current_streak = streak;
        stats
    }

    #[must_use]
    pub fn losses(&self) -> usize {
        self.games - self.wins
    }

    /// Percentage of games won, 0 when no games were played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pattern, Verdict};
    use chrono::Local;

    fn game(word_size: usize, guesses: usize, won: bool) -> HistoryRecord {
        let rows = 6;
        let miss = Pattern::new(vec![Verdict::Absent; word_size]);
        let mut row_texts = vec![String::new(); rows];
        let mut grid = vec![Pattern::default(); rows];
        for i in 0..guesses {
            row_texts[i] = "x".repeat(word_size);
            grid[i] = miss.clone();
        }
        if won {
            grid[guesses - 1] = Pattern::perfect(word_size);
        }
        HistoryRecord {
            rows,
            word_size,
            row_texts,
            grid,
            secret: "x".repeat(word_size),
            completed_at: Local::now(),
        }
    }

    #[test]
    fn empty_history() {
        let stats = HistoryStats::from_records(&[]);
        assert_eq!(stats.games, 0);
        assert!((stats.win_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn counts_and_streaks() {
        let records = vec![
            game(5, 3, true),
            game(5, 4, true),
            game(5, 6, false),
            game(4, 2, true),
            game(5, 3, true),
        ];
        let stats = HistoryStats::from_records(&records);

        assert_eq!(stats.games, 5);
        assert_eq!(stats.wins, 4);
        assert_eq!(stats.losses(), 1);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.distribution.get(&3), Some(&2));
        assert_eq!(stats.distribution.get(&4), Some(&1));
        assert_eq!(stats.distribution.get(&6), None);
        assert_eq!(stats.by_word_size.get(&4), Some(&1));
        assert!((stats.win_rate() - 80.0).abs() < 1e-9);
    }
}
