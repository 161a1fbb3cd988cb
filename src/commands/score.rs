//! Score command
//!
//! Scores a single guess against a chosen secret without starting a game.

use crate::core::{Pattern, Word, evaluate};
use anyhow::{Result, bail};

/// Result of scoring one pair of words
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub pattern: Pattern,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word contains non-letters or the lengths differ.
pub fn score_words(secret: &str, guess: &str) -> Result<ScoreResult> {
    let secret = Word::new(secret).map_err(|e| anyhow::anyhow!("Invalid secret: {e}"))?;
    let guess = Word::new(guess).map_err(|e| anyhow::anyhow!("Invalid guess: {e}"))?;

    if secret.len() != guess.len() {
        bail!(
            "Guess has {} letters but the secret has {}",
            guess.len(),
            secret.len()
        );
    }

    let pattern = evaluate(&secret, &guess);
    Ok(ScoreResult {
        secret,
        guess,
        pattern,
    })
}
