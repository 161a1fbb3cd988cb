//! Word list parsing utilities
//!
//! Turns newline-delimited word files and embedded slices into normalized
//! words of a single length.

use crate::core::Word;

/// Parse newline-delimited text into lowercase words of `length` letters
///
/// Blank lines, words of another length and entries with non-letters are
/// skipped.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse_words;
///
/// let words = parse_words("Crane\n\nslate\ntoolong\nab3de\n", 5);
/// assert_eq!(words, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_words(content: &str, length: usize) -> Vec<String> {
    words_from_iter(content.lines(), length)
}

/// Convert an embedded string slice to normalized words
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<String> {
    words_from_iter(slice.iter().copied(), length)
}

fn words_from_iter<'a>(lines: impl Iterator<Item = &'a str>, length: usize) -> Vec<String> {
    let mut skipped = 0usize;
    let words: Vec<String> = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::with_length(line, length) {
            Ok(word) => Some(word.text().to_string()),
            Err(_) => {
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::debug!("skipped {skipped} entries that are not {length}-letter words");
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "SLATE", "irate"], 5);
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"], 5);
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[], 5).is_empty());
    }

    #[test]
    fn parse_words_trims_whitespace() {
        let words = parse_words("  cat \r\ndog\n\n  \nbird\n", 3);
        assert_eq!(words, vec!["cat", "dog"]);
    }
}
