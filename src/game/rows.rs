//! Word length to attempt count table

/// Number of attempts granted for each supported word length
pub const ROW_COUNTS: &[(usize, usize)] = &[(3, 5), (4, 5), (5, 6), (6, 7), (7, 7), (8, 7)];

/// Look up how many rows a game with `word_size` letters gets
///
/// Returns `None` for unsupported lengths.
///
/// # Examples
/// ```
/// use wordle_game::game::rows_for;
///
/// assert_eq!(rows_for(5), Some(6));
/// assert_eq!(rows_for(9), None);
/// ```
#[must_use]
pub fn rows_for(word_size: usize) -> Option<usize> {
    ROW_COUNTS
        .iter()
        .find(|&&(size, _)| size == word_size)
        .map(|&(_, rows)| rows)
}

/// All word lengths that can be played
pub fn supported_sizes() -> impl Iterator<Item = usize> {
    ROW_COUNTS.iter().map(|&(size, _)| size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_expected_counts() {
        let expected = [(3, 5), (4, 5), (5, 6), (6, 7), (7, 7), (8, 7)];
        for (size, rows) in expected {
            assert_eq!(rows_for(size), Some(rows), "word size {size}");
        }
    }

    #[test]
    fn unlisted_sizes_unsupported() {
        for size in [0, 1, 2, 9, 12] {
            assert_eq!(rows_for(size), None);
        }
    }

    #[test]
    fn supported_sizes_in_order() {
        assert_eq!(supported_sizes().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7, 8]);
    }
}
