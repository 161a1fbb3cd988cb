//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, empty_row, pattern_to_emoji};
use crate::commands::{HistoryStats, ScoreResult};
use crate::core::Word;
use crate::history::HistoryRecord;
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.text().to_uppercase().bright_yellow().bold(),
        result.guess.text().to_uppercase().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(&result.guess, &result.pattern));
    println!("  {}", pattern_to_emoji(&result.pattern));
    println!(
        "\n  Correct: {}   Present: {}",
        result.pattern.count_correct().to_string().green(),
        result.pattern.count_present().to_string().yellow()
    );
}

/// Print a finished game as a board
pub fn print_record(record: &HistoryRecord) {
    let when = record.completed_at.format("%Y-%m-%d %H:%M");
    let outcome = if record.won() {
        format!("won in {}/{}", record.guesses_used(), record.rows).green()
    } else {
        format!("lost {}/{}", record.guesses_used(), record.rows).red()
    };
    println!(
        "\n{}  {}  {}",
        when.to_string().bright_black(),
        record.secret.to_uppercase().bright_yellow().bold(),
        outcome
    );

    for (text, pattern) in record.row_texts.iter().zip(&record.grid) {
        match Word::new(text.as_str()) {
            Ok(word) if !pattern.is_empty() => println!("  {}", colored_row(&word, pattern)),
            _ => println!("  {}", empty_row(record.word_size).bright_black()),
        }
    }
}

/// Print aggregate statistics from the history file
pub fn print_history_stats(stats: &HistoryStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAME HISTORY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Results:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Wins / losses:    {} / {}", stats.wins, stats.losses());
    println!("   Current streak:   {}", stats.current_streak);
    println!("   Best streak:      {}", stats.max_streak);

    if !stats.by_word_size.is_empty() {
        println!("\n🔤 {}", "Word sizes:".bright_cyan().bold());
        for (size, count) in &stats.by_word_size {
            println!("   {size} letters: {count}");
        }
    }

    if stats.wins == 0 {
        return;
    }

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.distribution.values().copied().max().unwrap_or(0) as f64;
    for (&guesses, &count) in &stats.distribution {
        let pct = count as f64 / stats.wins as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
