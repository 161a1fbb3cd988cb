//! One game from secret draw to final record

use super::rows_for;
use super::surface::RenderSurface;
use crate::core::{Pattern, Word, evaluate};
use crate::history::{HistoryError, HistoryRecord, HistorySink};
use crate::wordlists::{WordList, WordListError, WordListManager};
use chrono::Local;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use thiserror::Error;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the guess for `row`
    InProgress { row: usize },
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Why a submitted guess was refused
///
/// A rejected guess never changes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("guess must be {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("guess may only contain the letters a-z")]
    InvalidCharacter,
    #[error("that word was already guessed")]
    DuplicateGuess,
    #[error("not in the word list")]
    NotInDictionary,
    #[error("the game is already over")]
    GameOver,
}

/// Failures while setting up a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    WordList(#[from] WordListError),
    #[error("secret '{secret}' is not a {length}-letter word from the list")]
    InvalidSecret { secret: String, length: usize },
}

/// A guess that passed validation and was scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub row: usize,
    pub guess: Word,
    pub pattern: Pattern,
    /// State after this guess
    pub state: GameState,
}

/// One attempt on the board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    text: String,
    pattern: Option<Pattern>,
}

impl Row {
    /// Submitted guess, empty if the row was never reached
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }
}

/// State of a single game
///
/// Created from a resolved [`WordList`]; mutated only through
/// [`submit_guess`](Self::submit_guess). Once the game is won or lost the
/// session is frozen and holds its [`HistoryRecord`].
#[derive(Debug)]
pub struct GameSession {
    word_list: Arc<WordList>,
    word_size: usize,
    rows: usize,
    secret: Word,
    current_row: usize,
    state: GameState,
    used_guesses: FxHashSet<String>,
    grid: Vec<Row>,
    record: Option<HistoryRecord>,
    save_error: Option<HistoryError>,
}

impl GameSession {
    /// Resolve the list for `word_size` through `manager`, then start a game
    ///
    /// # Errors
    ///
    /// Returns the word list failure if the length is unsupported or has no
    /// secrets. No session exists in that case.
    pub async fn start(manager: &WordListManager, word_size: usize) -> Result<Self, SessionError> {
        let list = manager.get(word_size).await?;
        Self::new(list)
    }

    /// Start a game with a secret drawn from the thread-local RNG
    ///
    /// # Errors
    ///
    /// Returns `EmptyList` if the list has no secret candidates.
    pub fn new(word_list: Arc<WordList>) -> Result<Self, SessionError> {
        Self::with_rng(word_list, &mut rand::rng())
    }

    /// Start a game with a secret drawn from `rng`
    ///
    /// # Errors
    ///
    /// Returns `EmptyList` if the list has no secret candidates.
    pub fn with_rng<R: Rng + ?Sized>(
        word_list: Arc<WordList>,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let secret = word_list.random_secret_with(rng)?.to_string();
        Self::with_secret(word_list, &secret)
    }

    /// Start a game with a chosen secret
    ///
    /// # Errors
    ///
    /// Returns `InvalidSecret` if `secret` is not a valid word of the list.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use wordle_game::game::{GameSession, GameState};
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = Arc::new(WordList::from_words(5, ["apple", "apply"], None::<Vec<&str>>).unwrap());
    /// let mut game = GameSession::with_secret(list, "apple").unwrap();
    ///
    /// let accepted = game.submit_guess("APPLE").unwrap();
    /// assert_eq!(accepted.state, GameState::Won);
    /// ```
    pub fn with_secret(word_list: Arc<WordList>, secret: &str) -> Result<Self, SessionError> {
        let word_size = word_list.length();
        let rows = rows_for(word_size).ok_or(WordListError::UnsupportedLength(word_size))?;
        let invalid = || SessionError::InvalidSecret {
            secret: secret.to_string(),
            length: word_size,
        };
        if !word_list.is_valid(secret) {
            return Err(invalid());
        }
        let secret = Word::with_length(secret, word_size).map_err(|_| invalid())?;

        log::info!("started {word_size}-letter game with {rows} rows");

        Ok(Self {
            word_list,
            word_size,
            rows,
            secret,
            current_row: 0,
            state: GameState::InProgress { row: 0 },
            used_guesses: FxHashSet::default(),
            grid: vec![Row::default(); rows],
            record: None,
            save_error: None,
        })
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn word_size(&self) -> usize {
        self.word_size
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Index of the next row to fill; equals `rows()` once every row is used
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub fn used_guess_count(&self) -> usize {
        self.used_guesses.len()
    }

    #[must_use]
    pub fn has_guessed(&self, word: &str) -> bool {
        self.used_guesses.contains(&word.to_ascii_lowercase())
    }

    #[must_use]
    pub fn grid(&self) -> &[Row] {
        &self.grid
    }

    #[must_use]
    pub fn word_list(&self) -> &WordList {
        &self.word_list
    }

    /// The secret, available only after the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.state.is_over().then_some(&self.secret)
    }

    /// The end-of-game snapshot, once the game is over
    #[must_use]
    pub const fn history_record(&self) -> Option<&HistoryRecord> {
        self.record.as_ref()
    }

    /// Why the history sink refused the record, if it did
    #[must_use]
    pub const fn history_save_error(&self) -> Option<&HistoryError> {
        self.save_error.as_ref()
    }

    /// Validate and score a guess
    ///
    /// Checks run in order and the first failure wins: length, letters only,
    /// not already guessed, in the word list. A rejection leaves the session
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] reason, or `GameOver` after the game ended.
    pub fn submit_guess(&mut self, text: &str) -> Result<Accepted, Rejection> {
        if self.state.is_over() {
            return Err(Rejection::GameOver);
        }

        let guess = self.validate(text).inspect_err(|reason| {
            log::debug!("rejected guess {text:?}: {reason}");
        })?;

        let row = self.current_row;
        let pattern = evaluate(&self.secret, &guess);

        self.used_guesses.insert(guess.text().to_string());
        self.grid[row] = Row {
            text: guess.text().to_string(),
            pattern: Some(pattern.clone()),
        };
        self.current_row += 1;

        self.state = if pattern.is_perfect() {
            GameState::Won
        } else if self.current_row == self.rows {
            GameState::Lost
        } else {
            GameState::InProgress {
                row: self.current_row,
            }
        };

        if self.state.is_over() {
            self.finish();
        }

        Ok(Accepted {
            row,
            guess,
            pattern,
            state: self.state,
        })
    }

    /// Submit a guess and forward the outcome to the collaborators
    ///
    /// Accepted rows are drawn on `surface`; the finishing guess also reveals
    /// the secret and hands the record to `sink`. A sink failure is logged
    /// and kept for [`history_save_error`](Self::history_save_error); it does
    /// not change the result of the game.
    ///
    /// # Errors
    ///
    /// Same as [`submit_guess`](Self::submit_guess).
    pub fn submit_guess_with(
        &mut self,
        text: &str,
        surface: &mut dyn RenderSurface,
        sink: &mut dyn HistorySink,
    ) -> Result<Accepted, Rejection> {
        let accepted = self.submit_guess(text)?;
        surface.draw_row(accepted.row, &accepted.guess, &accepted.pattern);

        if accepted.state.is_over() {
            surface.reveal(&self.secret, accepted.state);
            if let Some(record) = &self.record
                && let Err(e) = sink.add_entry(record.clone())
            {
                log::warn!("failed to save game history: {e}");
                self.save_error = Some(e);
            }
        }

        Ok(accepted)
    }

    fn validate(&self, text: &str) -> Result<Word, Rejection> {
        let actual = text.chars().count();
        if actual != self.word_size {
            return Err(Rejection::WrongLength {
                expected: self.word_size,
                actual,
            });
        }

        let guess = Word::new(text).map_err(|_| Rejection::InvalidCharacter)?;

        if self.used_guesses.contains(guess.text()) {
            return Err(Rejection::DuplicateGuess);
        }

        if !self.word_list.is_valid(guess.text()) {
            return Err(Rejection::NotInDictionary);
        }

        Ok(guess)
    }

    fn finish(&mut self) {
        debug_assert!(self.record.is_none(), "game finished twice");

        let record = HistoryRecord {
            rows: self.rows,
            word_size: self.word_size,
            row_texts: self.grid.iter().map(|r| r.text.clone()).collect(),
            grid: self
                .grid
                .iter()
                .map(|r| r.pattern.clone().unwrap_or_default())
                .collect(),
            secret: self.secret.text().to_string(),
            completed_at: Local::now(),
        };

        log::info!(
            "game over ({:?}) after {} of {} rows",
            self.state,
            self.current_row,
            self.rows
        );
        self.record = Some(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct};
    use crate::game::NullSurface;
    use crate::history::MemoryHistory;
    use crate::wordlists::EmbeddedSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn five_letter_list() -> Arc<WordList> {
        Arc::new(
            WordList::from_words(
                5,
                ["apple", "apply", "crane", "slate", "irate", "grate", "plumb"],
                Some(["apple"]),
            )
            .unwrap(),
        )
    }

    fn four_letter_list() -> Arc<WordList> {
        Arc::new(
            WordList::from_words(
                4,
                ["lamp", "lion", "moon", "rose", "star", "wolf", "ruby"],
                None::<[&str; 0]>,
            )
            .unwrap(),
        )
    }

    #[derive(Default)]
    struct RecordingSurface {
        rows: Vec<(usize, String, Pattern)>,
        revealed: Option<(String, GameState)>,
    }

    impl RenderSurface for RecordingSurface {
        fn draw_row(&mut self, row: usize, guess: &Word, pattern: &Pattern) {
            self.rows.push((row, guess.text().to_string(), pattern.clone()));
        }

        fn reveal(&mut self, secret: &Word, state: GameState) {
            self.revealed = Some((secret.text().to_string(), state));
        }
    }

    #[test]
    fn initial_state() {
        let game = GameSession::with_secret(five_letter_list(), "apple").unwrap();
        assert_eq!(game.state(), GameState::InProgress { row: 0 });
        assert_eq!(game.rows(), 6);
        assert_eq!(game.word_size(), 5);
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.used_guess_count(), 0);
        assert_eq!(game.grid().len(), 6);
        assert!(game.revealed_secret().is_none());
        assert!(game.history_record().is_none());
    }

    #[test]
    fn apply_is_not_a_win() {
        let mut game = GameSession::with_secret(five_letter_list(), "apple").unwrap();
        let accepted = game.submit_guess("apply").unwrap();

        assert_eq!(accepted.row, 0);
        assert_eq!(
            accepted.pattern.verdicts(),
            &[Correct, Correct, Correct, Correct, Absent]
        );
        assert_eq!(accepted.state, GameState::InProgress { row: 1 });
        assert_eq!(game.grid()[0].text(), "apply");
        assert_eq!(game.grid()[0].pattern(), Some(&accepted.pattern));
    }

    #[test]
    fn exact_match_wins() {
        let mut game = GameSession::with_secret(five_letter_list(), "apple").unwrap();
        game.submit_guess("crane").unwrap();
        let accepted = game.submit_guess("apple").unwrap();

        assert_eq!(accepted.state, GameState::Won);
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.revealed_secret().map(Word::text), Some("apple"));

        let record = game.history_record().unwrap();
        assert_eq!(record.secret, "apple");
        assert_eq!(record.rows, 6);
        assert_eq!(record.word_size, 5);
        assert_eq!(record.row_texts, vec!["crane", "apple", "", "", "", ""]);
        assert!(record.grid[1].is_perfect());
        assert!(record.grid[2].is_empty());
        assert!(record.won());
    }

    #[test]
    fn exhausting_rows_loses() {
        let mut game = GameSession::with_secret(four_letter_list(), "ruby").unwrap();
        assert_eq!(game.rows(), 5);

        for (i, guess) in ["lamp", "lion", "moon", "rose", "star"].iter().enumerate() {
            let accepted = game.submit_guess(guess).unwrap();
            assert_eq!(accepted.row, i);
        }

        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.current_row(), 5);

        let record = game.history_record().unwrap();
        assert_eq!(record.row_texts.len(), 5);
        assert!(record.row_texts.iter().all(|t| !t.is_empty()));
        assert!(!record.won());
        assert_eq!(record.secret, "ruby");
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let mut game = GameSession::with_secret(four_letter_list(), "ruby").unwrap();
        for guess in ["lamp", "lion", "moon", "rose"] {
            game.submit_guess(guess).unwrap();
        }
        assert_eq!(game.submit_guess("ruby").unwrap().state, GameState::Won);
    }

    #[test]
    fn rejection_reasons_in_order() {
        let mut game = GameSession::with_secret(five_letter_list(), "apple").unwrap();

        assert_eq!(
            game.submit_guess("app"),
            Err(Rejection::WrongLength {
                expected: 5,
                actual: 3
            })
        );
        // Length is checked before characters.
        assert!(matches!(
            game.submit_guess("ab1"),
            Err(Rejection::WrongLength { .. })
        ));
        assert_eq!(game.submit_guess("ap-le"), Err(Rejection::InvalidCharacter));
        assert_eq!(game.submit_guess("zzzzz"), Err(Rejection::NotInDictionary));

        game.submit_guess("crane").unwrap();
        assert_eq!(game.submit_guess("CRANE"), Err(Rejection::DuplicateGuess));
    }

    #[test]
    fn invalid_characters_leave_state_untouched() {
        let mut game = GameSession::with_secret(four_letter_list(), "ruby").unwrap();
        assert_eq!(game.submit_guess("12ab"), Err(Rejection::InvalidCharacter));
        assert_eq!(game.state(), GameState::InProgress { row: 0 });
        assert_eq!(game.used_guess_count(), 0);
        assert_eq!(game.current_row(), 0);
        assert!(game.grid().iter().all(|r| r.text().is_empty()));
    }

    #[test]
    fn non_ascii_letters_rejected() {
        let mut game = GameSession::with_secret(five_letter_list(), "apple").unwrap();
        assert_eq!(game.submit_guess("crâne"), Err(Rejection::InvalidCharacter));
    }

    #[test]
    fn duplicate_check_is_case_insensitive() {
        let mut game = GameSession::with_secret(five_letter_list(), "apple").unwrap();
        game.submit_guess("Slate").unwrap();
        assert!(game.has_guessed("SLATE"));
        assert_eq!(game.submit_guess("sLaTe"), Err(Rejection::DuplicateGuess));
        assert_eq!(game.used_guess_count(), 1);
    }

    #[test]
    fn submissions_after_game_over_rejected() {
        let mut game = GameSession::with_secret(five_letter_list(), "apple").unwrap();
        game.submit_guess("apple").unwrap();
        let record = game.history_record().cloned();

        assert_eq!(game.submit_guess("crane"), Err(Rejection::GameOver));
        assert_eq!(game.submit_guess("x"), Err(Rejection::GameOver));
        assert_eq!(game.history_record().cloned(), record);
        assert_eq!(game.current_row(), 1);
    }

    #[test]
    fn collaborators_notified() {
        let mut game = GameSession::with_secret(five_letter_list(), "apple").unwrap();
        let mut surface = RecordingSurface::default();
        let mut sink = MemoryHistory::new();

        assert!(game.submit_guess_with("nope", &mut surface, &mut sink).is_err());
        game.submit_guess_with("crane", &mut surface, &mut sink).unwrap();
        assert!(sink.entries().is_empty());
        assert!(surface.revealed.is_none());

        game.submit_guess_with("apple", &mut surface, &mut sink).unwrap();
        assert_eq!(
            game.submit_guess_with("slate", &mut surface, &mut sink),
            Err(Rejection::GameOver)
        );

        let drawn: Vec<(usize, &str)> = surface
            .rows
            .iter()
            .map(|(r, t, _)| (*r, t.as_str()))
            .collect();
        assert_eq!(drawn, vec![(0, "crane"), (1, "apple")]);
        assert_eq!(surface.revealed, Some(("apple".to_string(), GameState::Won)));
        assert_eq!(sink.entries().len(), 1);
        assert_eq!(Some(&sink.entries()[0]), game.history_record());
        assert!(game.history_save_error().is_none());
    }

    struct BrokenSink;

    impl HistorySink for BrokenSink {
        fn add_entry(&mut self, _record: HistoryRecord) -> Result<(), HistoryError> {
            Err(std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory").into())
        }
    }

    #[test]
    fn sink_failure_is_kept_on_session() {
        let mut game = GameSession::with_secret(five_letter_list(), "apple").unwrap();

        game.submit_guess_with("crane", &mut NullSurface, &mut BrokenSink).unwrap();
        assert!(game.history_save_error().is_none());

        let accepted = game
            .submit_guess_with("apple", &mut NullSurface, &mut BrokenSink)
            .unwrap();
        assert_eq!(accepted.state, GameState::Won);
        assert!(game.history_record().is_some());
        assert!(matches!(
            game.history_save_error(),
            Some(HistoryError::Io(e)) if e.kind() == std::io::ErrorKind::NotADirectory
        ));
    }

    #[test]
    fn secret_drawn_from_secret_subset() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = GameSession::with_rng(five_letter_list(), &mut rng).unwrap();
        assert_eq!(game.submit_guess("apple").unwrap().state, GameState::Won);
    }

    #[test]
    fn empty_secret_list_fails_before_session() {
        let list = Arc::new(WordList::from_words(5, ["apple"], Some(Vec::<&str>::new())).unwrap());
        assert!(matches!(
            GameSession::new(list),
            Err(SessionError::WordList(WordListError::EmptyList(5)))
        ));
    }

    #[test]
    fn secret_of_wrong_length_rejected() {
        assert!(matches!(
            GameSession::with_secret(five_letter_list(), "lamp"),
            Err(SessionError::InvalidSecret { length: 5, .. })
        ));
    }

    #[test]
    fn secret_outside_list_rejected() {
        match GameSession::with_secret(five_letter_list(), "zebra") {
            Err(SessionError::InvalidSecret { secret, length }) => {
                assert_eq!(secret, "zebra");
                assert_eq!(length, 5);
            }
            other => panic!("expected InvalidSecret, got {other:?}"),
        }
    }

    #[test]
    fn secret_matches_list_case_insensitively() {
        let mut game = GameSession::with_secret(five_letter_list(), "APPLY").unwrap();
        assert_eq!(game.submit_guess("apply").unwrap().state, GameState::Won);
    }

    #[tokio::test]
    async fn start_resolves_then_constructs() {
        let manager = WordListManager::new(Arc::new(EmbeddedSource));
        let game = GameSession::start(&manager, 6).await.unwrap();
        assert_eq!(game.rows(), 7);
        assert_eq!(game.word_size(), 6);
    }

    #[tokio::test]
    async fn start_with_unsupported_length() {
        let manager = WordListManager::new(Arc::new(EmbeddedSource));
        assert!(matches!(
            GameSession::start(&manager, 9).await,
            Err(SessionError::WordList(WordListError::UnsupportedLength(9)))
        ));
    }
}
