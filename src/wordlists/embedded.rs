//! Embedded word lists
//!
//! Word lists compiled into the binary at build time, one pair per length.

/// Allowed guesses and secret candidates for one word length
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedList {
    pub length: usize,
    pub allowed: &'static [&'static str],
    pub secrets: &'static [&'static str],
}

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/wordlists.rs"));

/// Find the embedded list for a word length
#[must_use]
pub fn embedded_for(length: usize) -> Option<&'static EmbeddedList> {
    EMBEDDED.iter().find(|list| list.length == length)
}
