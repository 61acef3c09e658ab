//! # Hangman - Guess the Country
//!
//! Entry point for a terminal hangman game. A country name is picked at
//! random and the player uncovers it one letter at a time; seven wrong
//! guesses and the round is lost.
//!
//! The interface is a terminal UI built with Ratatui: an on-screen letter
//! board, an ASCII gallows that grows with each miss, and session win/loss
//! counters.
//!
//! ## Usage
//! Run with `cargo run --release`. Letters can be typed directly, picked
//! with the arrow keys and Enter, or clicked with the mouse.

mod app;
mod tui;

use clap::Parser;
use std::io;

use crate::app::App;

/// Validates a word supplied on the command line.
///
/// Only ASCII letters are playable, so anything else is rejected up front.
/// The word is uppercased to match the board.
fn parse_word(raw: &str) -> Result<String, String> {
    if raw.is_empty() {
        return Err("word must not be empty".to_string());
    }
    if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("word must contain only ASCII letters, got {raw:?}"));
    }
    Ok(raw.to_uppercase())
}

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Play this word instead of a random country
    #[clap(short, long, value_parser = parse_word)]
    word: Option<String>,

    /// Seed for the word picker, for reproducible rounds
    #[clap(short, long)]
    seed: Option<u64>,

    /// Skip the welcome dialog and jump straight into the round
    #[clap(long, action = clap::ArgAction::SetTrue)]
    no_welcome: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut app = App::new(args.word, args.seed, args.no_welcome);
    tui::run(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word_uppercases() {
        assert_eq!(parse_word("china"), Ok("CHINA".to_string()));
        assert_eq!(parse_word("Norway"), Ok("NORWAY".to_string()));
    }

    #[test]
    fn test_parse_word_rejects_non_letters() {
        assert!(parse_word("").is_err());
        assert!(parse_word("NEW ZEALAND").is_err());
        assert!(parse_word("C3PO").is_err());
        assert!(parse_word("CÔTE").is_err());
    }
}
