//! Guess scoring and feedback pattern representation
//!
//! A pattern is the sequence of verdicts produced by scoring one guess,
//! one [`Verdict`] per letter.

use super::{Verdict, Word};
use serde::{Deserialize, Serialize};

/// Feedback pattern for a guess
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(Vec<Verdict>);

/// Score `guess` against `secret`
///
/// Each column is scored independently, left to right:
/// 1. same letter at the same column: `Correct`
/// 2. letter appears anywhere in the secret: `Present`
/// 3. otherwise: `Absent`
///
/// This is a plain containment rule. Letters are not consumed as they
/// match, so a guess with a repeated letter can be marked `Present` more
/// times than the secret contains it (`"eerie"` against `"crane"` scores
/// both leading `e`s as `Present`).
///
/// Both words are expected to have the same length; extra letters on either
/// side are ignored.
///
/// # Examples
/// ```
/// use wordle_game::core::{Verdict, Word, evaluate};
///
/// let secret = Word::new("apple").unwrap();
/// let guess = Word::new("apply").unwrap();
/// let pattern = evaluate(&secret, &guess);
///
/// assert_eq!(pattern.verdicts()[4], Verdict::Absent);
/// assert!(!pattern.is_perfect());
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Pattern {
    debug_assert_eq!(secret.len(), guess.len(), "scoring words of different lengths");

    let verdicts: Vec<Verdict> = guess
        .chars()
        .iter()
        .zip(secret.chars())
        .map(|(&g, &s)| {
            if g == s {
                Verdict::Correct
            } else if secret.has_letter(g) {
                Verdict::Present
            } else {
                Verdict::Absent
            }
        })
        .collect();

    log::debug!("scored {guess} against secret: {verdicts:?}");
    Pattern(verdicts)
}

impl Pattern {
    /// Build a pattern from raw verdicts
    #[must_use]
    pub const fn new(verdicts: Vec<Verdict>) -> Self {
        Self(verdicts)
    }

    /// All-`Correct` pattern of the given length
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self(vec![Verdict::Correct; len])
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is `Correct`
    ///
    /// An empty pattern is never perfect.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count the number of `Correct` verdicts
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Verdict::Correct)
    }

    /// Count the number of `Present` verdicts
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Verdict::Present)
    }

    fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in &self.0 {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
