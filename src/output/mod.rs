//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
mod terminal;

pub use display::{print_history_stats, print_record, print_score_result};
pub use terminal::TerminalSurface;
