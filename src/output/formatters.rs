//! Formatting utilities for terminal output

use crate::core::{Pattern, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: &Pattern) -> String {
    pattern.to_emoji()
}

/// One letter drawn as a coloured tile
#[must_use]
pub fn tile(letter: u8, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// A whole guess drawn as coloured tiles
#[must_use]
pub fn colored_row(guess: &Word, pattern: &Pattern) -> String {
    guess
        .chars()
        .iter()
        .zip(pattern.verdicts())
        .map(|(&letter, &verdict)| tile(letter, verdict).to_string())
        .collect()
}

/// Placeholder for a row that was never reached
#[must_use]
pub fn empty_row(word_size: usize) -> String {
    " _ ".repeat(word_size)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
