//! Command implementations

pub mod play;
pub mod score;
pub mod stats;

pub use play::{PlayOutcome, run_play};
pub use score::{ScoreResult, score_words};
pub use stats::HistoryStats;
