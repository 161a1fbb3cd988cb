//! Terminal front end for a game in progress

use super::formatters::colored_row;
use crate::core::{Pattern, Word};
use crate::game::{GameState, RenderSurface};
use colored::Colorize;
use std::io::Write;

/// Draws accepted rows as coloured tiles on a writer
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            log::warn!("failed to draw to terminal: {e}");
        }
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    fn draw_row(&mut self, row: usize, guess: &Word, pattern: &Pattern) {
        let line = format!(
            "  {}  {}",
            (row + 1).to_string().bright_black(),
            colored_row(guess, pattern)
        );
        self.write_line(&line);
    }

    fn reveal(&mut self, secret: &Word, state: GameState) {
        let word = secret.text().to_uppercase();
        let line = match state {
            GameState::Won => format!(
                "\n{} {}",
                "Solved!".green().bold(),
                word.bright_yellow().bold()
            ),
            _ => format!(
                "\n{} {}",
                "The word was".red().bold(),
                word.bright_yellow().bold()
            ),
        };
        self.write_line(&line);
    }
}
