//! Wordle Game - CLI
//!
//! Play Wordle in the terminal with words of 3 to 8 letters, score single
//! guesses and review past games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{HistoryStats, PlayOutcome, run_play, score_words},
    config::{DEFAULT_WORD_SIZE, GameConfig, default_history_path},
    game::GameSession,
    history::{HistorySink, JsonlHistory, MemoryHistory},
    logging::init_logging,
    output::{TerminalSurface, print_history_stats, print_record, print_score_result},
    wordlists::WordListManager,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word; 3 to 8 letters, 5 to 7 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play {
        /// Word length: 3 to 8
        #[arg(short = 'n', long, default_value_t = DEFAULT_WORD_SIZE)]
        size: usize,

        /// Seed for choosing the secret word
        #[arg(long)]
        seed: Option<u64>,

        /// Directory of '<n>.txt' word lists instead of the built-in lists
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// History file (default: platform data dir)
        #[arg(long, conflicts_with = "no_history")]
        history: Option<PathBuf>,

        /// Do not record this game
        #[arg(long)]
        no_history: bool,
    },

    /// Score a guess against a secret word
    Score {
        /// The hidden word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Show statistics from past games
    Stats {
        /// History file (default: platform data dir)
        #[arg(long)]
        history: Option<PathBuf>,

        /// Also print the last N boards
        #[arg(short, long, default_value_t = 0)]
        last: usize,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Play {
        size: DEFAULT_WORD_SIZE,
        seed: None,
        words: None,
        history: None,
        no_history: false,
    });

    match command {
        Commands::Play {
            size,
            seed,
            words,
            history,
            no_history,
        } => {
            let config = GameConfig {
                word_size: size,
                wordlist_dir: words,
                history_path: if no_history {
                    None
                } else {
                    history.or_else(default_history_path)
                },
                seed,
            };
            run_play_command(config).await
        }
        Commands::Score { secret, guess } => {
            let result = score_words(&secret, &guess)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Stats { history, last } => run_stats_command(history, last),
    }
}

async fn run_play_command(config: GameConfig) -> Result<()> {
    config.validate()?;

    let manager = WordListManager::new(config.source());
    let list = manager
        .get(config.word_size)
        .await
        .with_context(|| format!("could not load {}-letter words", config.word_size))?;

    let mut session = match config.seed {
        Some(seed) => GameSession::with_rng(list, &mut StdRng::seed_from_u64(seed))?,
        None => GameSession::new(list)?,
    };

    let mut sink: Box<dyn HistorySink> = match &config.history_path {
        Some(path) => Box::new(JsonlHistory::new(path)),
        None => Box::new(MemoryHistory::new()),
    };
    let mut surface = TerminalSurface::new(io::stdout());

    let outcome = run_play(
        &mut session,
        io::stdin().lock(),
        io::stdout(),
        &mut surface,
        sink.as_mut(),
    )?;

    match (outcome, &config.history_path) {
        (PlayOutcome::Abandoned, _) => println!("Game abandoned; nothing recorded."),
        (PlayOutcome::Finished(_), Some(path)) if session.history_save_error().is_none() => {
            println!("Saved to {}", path.display());
        }
        (PlayOutcome::Finished(_), _) => {}
    }

    Ok(())
}

fn run_stats_command(history: Option<PathBuf>, last: usize) -> Result<()> {
    let path = history
        .or_else(default_history_path)
        .context("no history file given and no platform data directory")?;

    let records = JsonlHistory::new(&path)
        .read_all()
        .with_context(|| format!("failed to read {}", path.display()))?;

    if records.is_empty() {
        println!("No games recorded in {}", path.display());
        return Ok(());
    }

    for record in records.iter().rev().take(last).rev() {
        print_record(record);
    }

    print_history_stats(&HistoryStats::from_records(&records));
    Ok(())
}
