//! Drawing hook for accepted guesses

use super::GameState;
use crate::core::{Pattern, Word};

/// Receives every scored row so a front end can draw it
///
/// The engine never renders; it only reports what changed.
pub trait RenderSurface {
    /// A guess was accepted at `row` and scored as `pattern`
    fn draw_row(&mut self, row: usize, guess: &Word, pattern: &Pattern);

    /// The game ended; the secret may now be shown
    fn reveal(&mut self, _secret: &Word, _state: GameState) {}
}

/// Surface that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn draw_row(&mut self, _row: usize, _guess: &Word, _pattern: &Pattern) {}
}
