//! Interactive play mode
//!
//! Reads guesses line by line and drives one [`GameSession`] to completion.

use crate::game::{GameSession, GameState, RenderSurface, Rejection};
use crate::history::HistorySink;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Finished(GameState),
    /// Input ended or the player quit before the game was over
    Abandoned,
}

/// Play one game reading guesses from `input` and writing prompts to `out`
///
/// Rejected guesses print the reason and re-prompt. `quit` or end of input
/// abandons the game without a history record. If `sink` refuses the final
/// record the failure is printed to `out`.
///
/// # Errors
///
/// Returns an error on I/O failure reading input or writing prompts.
pub fn run_play<R, W>(
    session: &mut GameSession,
    mut input: R,
    mut out: W,
    surface: &mut dyn RenderSurface,
    sink: &mut dyn HistorySink,
) -> Result<PlayOutcome>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "\nGuess the {}-letter word in {} tries. Type 'quit' to give up.\n",
        session.word_size(),
        session.rows()
    )?;

    loop {
        let GameState::InProgress { row } = session.state() else {
            if let Some(e) = session.history_save_error() {
                writeln!(out, "{}", format!("✗ could not save game history: {e}").red())?;
            }
            return Ok(PlayOutcome::Finished(session.state()));
        };

        write!(out, "Guess {}/{}: ", row + 1, session.rows())?;
        out.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("failed to read guess")?;
        if read == 0 {
            writeln!(out)?;
            return Ok(PlayOutcome::Abandoned);
        }

        let text = line.trim();
        if matches!(text.to_ascii_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(PlayOutcome::Abandoned);
        }

        match session.submit_guess_with(text, surface, sink) {
            Ok(_) | Err(Rejection::GameOver) => {}
            Err(reason) => writeln!(out, "{}", format!("✗ {reason}").red())?,
        }
    }
}
