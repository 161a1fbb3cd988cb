//! Core domain types for the game
//!
//! Words, verdicts and the scoring function. Everything here is pure and
//! synchronous.

mod pattern;
mod verdict;
mod word;

pub use pattern::{Pattern, evaluate};
pub use verdict::Verdict;
pub use word::{Word, WordError};
