//! Per-letter scoring outcome

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of scoring one letter of a guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Letter matches the secret at this column
    Correct,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Letter does not occur in the secret
    Absent,
}

impl Verdict {
    /// Single-character code used on the command line (G/Y/-)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
