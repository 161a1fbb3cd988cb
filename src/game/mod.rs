//! Game engine
//!
//! The row table, the per-game state machine and the hook front ends use to
//! draw it.

mod rows;
mod session;
mod surface;

pub use rows::{ROW_COUNTS, rows_for, supported_sizes};
pub use session::{Accepted, GameSession, GameState, Rejection, Row, SessionError};
pub use surface::{NullSurface, RenderSurface};
