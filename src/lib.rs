//! Wordle Game
//!
//! A single-player word-guessing game engine for words of 3 to 8 letters.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wordle_game::game::GameSession;
//! use wordle_game::wordlists::{EmbeddedSource, WordListManager};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let manager = WordListManager::new(Arc::new(EmbeddedSource));
//! let mut game = GameSession::start(&manager, 5).await?;
//!
//! match game.submit_guess("crane") {
//!     Ok(accepted) => println!("{}", accepted.pattern.to_emoji()),
//!     Err(reason) => println!("rejected: {reason}"),
//! }
//! # Ok(())
//! # }
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game engine
pub mod game;

// Finished-game records
pub mod history;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Runtime configuration
pub mod config;

// Logging setup
pub mod logging;
