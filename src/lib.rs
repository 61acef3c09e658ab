use std::collections::BTreeSet;
use std::fmt;

pub mod words;

/// Number of incorrect guesses that ends a round in a loss.
pub const MAX_WRONG: usize = 7;

/// Placeholder shown for word positions that have not been revealed yet.
pub const PLACEHOLDER: char = '_';

/// The tagged result of a single accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The letter occurs in the word; every matching position was revealed.
    Correct,
    /// The letter does not occur in the word; the wrong-guess counter grew by one.
    Incorrect,
    /// The guess revealed the last hidden position.
    Won,
    /// The guess was the seventh incorrect one.
    Lost,
}

impl Outcome {
    /// Returns true if this outcome ends the round.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Won | Outcome::Lost)
    }
}

/// One play-through of the guessing game, from word selection to win or loss.
///
/// The round tracks the secret word, the reveal mask the player sees, the
/// wrong-guess counter, and the set of letters already tried. It performs no
/// I/O and never fails: inputs outside its domain (non-letters, repeats,
/// guesses after the round is over) are ignored as no-ops.
#[derive(Debug, Clone)]
pub struct Round {
    /// The secret word, uppercase ASCII letters.
    word: Vec<char>,
    /// Revealed letters in place; hidden positions hold [`PLACEHOLDER`].
    mask: Vec<char>,
    /// Incorrect guesses so far, in `0..=MAX_WRONG`.
    wrong_guesses: usize,
    /// Every letter tried this round, correct or not.
    guessed: BTreeSet<char>,
}

impl Round {
    /// Creates a round on `word`. See [`Round::reset`] for the word domain.
    pub fn new(word: &str) -> Self {
        let mut round = Round {
            word: Vec::new(),
            mask: Vec::new(),
            wrong_guesses: 0,
            guessed: BTreeSet::new(),
        };
        round.reset(word);
        round
    }

    /// Starts a fresh round on `word`: installs the word (normalized to
    /// uppercase), hides every position, zeroes the wrong-guess counter and
    /// forgets all tried letters. Callers supply ASCII letters; the bundled
    /// vocabulary guarantees it.
    pub fn reset(&mut self, word: &str) {
        self.word = word.chars().map(|c| c.to_ascii_uppercase()).collect();
        self.mask = vec![PLACEHOLDER; self.word.len()];
        self.wrong_guesses = 0;
        self.guessed.clear();
    }

    /// Applies a single letter guess and reports what happened.
    ///
    /// A letter contained in the word reveals every occurrence at once and
    /// yields [`Outcome::Correct`], or [`Outcome::Won`] when nothing is left
    /// hidden. A letter not in the word bumps the counter and yields
    /// [`Outcome::Incorrect`], or [`Outcome::Lost`] on the seventh miss. The
    /// two terminal outcomes are mutually exclusive per guess.
    ///
    /// Returns `None` without changing anything when the input is not an
    /// ASCII letter, the letter was already tried, or the round is over.
    /// Lowercase input is treated as its uppercase equivalent.
    pub fn guess(&mut self, letter: char) -> Option<Outcome> {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return None;
        }
        if self.is_over() || self.guessed.contains(&letter) {
            return None;
        }
        self.guessed.insert(letter);

        if self.word.contains(&letter) {
            for (position, &expected) in self.word.iter().enumerate() {
                if expected == letter {
                    self.mask[position] = letter;
                }
            }
            if self.is_won() {
                Some(Outcome::Won)
            } else {
                Some(Outcome::Correct)
            }
        } else {
            self.wrong_guesses += 1;
            if self.is_lost() {
                Some(Outcome::Lost)
            } else {
                Some(Outcome::Incorrect)
            }
        }
    }

    /// The reveal mask: revealed letters in place, [`PLACEHOLDER`] elsewhere.
    pub fn mask(&self) -> &[char] {
        &self.mask
    }

    /// Number of incorrect guesses so far.
    pub fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    /// Guesses left before the round is lost.
    pub fn remaining_guesses(&self) -> usize {
        MAX_WRONG - self.wrong_guesses
    }

    /// Letters tried this round, in alphabetical order.
    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Whether `letter` was already tried this round, case-insensitive.
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_uppercase())
    }

    /// True once every position of the word is revealed.
    pub fn is_won(&self) -> bool {
        self.mask == self.word
    }

    /// True once the wrong-guess counter has reached [`MAX_WRONG`].
    pub fn is_lost(&self) -> bool {
        self.wrong_guesses >= MAX_WRONG
    }

    /// True when the round has ended in a win or a loss.
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Length of the secret word in letters.
    pub fn word_len(&self) -> usize {
        self.word.len()
    }
}

impl fmt::Display for Round {
    /// Renders the player-visible mask with spaces between the positions,
    /// e.g. `C _ _ _ _`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.mask.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round() {
        let round = Round::new("FINLAND");
        assert_eq!(round.word_len(), 7);
        assert_eq!(round.to_string(), "_ _ _ _ _ _ _");
        assert_eq!(round.wrong_guesses(), 0);
        assert_eq!(round.remaining_guesses(), MAX_WRONG);
        assert!(round.guessed().is_empty());
        assert!(!round.is_over());
    }

    #[test]
    fn test_correct_guess_reveals_every_occurrence() {
        let mut round = Round::new("SWEDEN");
        assert_eq!(round.guess('E'), Some(Outcome::Correct));
        assert_eq!(round.to_string(), "_ _ E _ E _");
        assert_eq!(round.wrong_guesses(), 0);
    }

    #[test]
    fn test_incorrect_guess_counts_and_leaves_mask() {
        let mut round = Round::new("CHINA");
        assert_eq!(round.guess('Z'), Some(Outcome::Incorrect));
        assert_eq!(round.wrong_guesses(), 1);
        assert_eq!(round.to_string(), "_ _ _ _ _");
    }

    #[test]
    fn test_china_round() {
        let mut round = Round::new("CHINA");
        assert_eq!(round.guess('C'), Some(Outcome::Correct));
        assert_eq!(round.to_string(), "C _ _ _ _");
        assert_eq!(round.guess('Z'), Some(Outcome::Incorrect));
        assert_eq!(round.wrong_guesses(), 1);
        assert_eq!(round.guess('H'), Some(Outcome::Correct));
        assert_eq!(round.guess('I'), Some(Outcome::Correct));
        assert_eq!(round.guess('N'), Some(Outcome::Correct));
        assert_eq!(round.guess('A'), Some(Outcome::Won));
        assert_eq!(round.to_string(), "C H I N A");
        assert!(round.is_won());
        assert!(!round.is_lost());
    }

    #[test]
    fn test_seventh_miss_loses_regardless_of_order() {
        for misses in [
            ['B', 'D', 'E', 'F', 'G', 'J', 'K'],
            ['K', 'J', 'G', 'F', 'E', 'D', 'B'],
        ] {
            let mut round = Round::new("CHINA");
            for (i, letter) in misses.into_iter().enumerate() {
                let expected = if i + 1 == MAX_WRONG {
                    Outcome::Lost
                } else {
                    Outcome::Incorrect
                };
                assert_eq!(round.guess(letter), Some(expected));
            }
            assert!(round.is_lost());
            assert!(round.is_over());
            assert_eq!(round.to_string(), "_ _ _ _ _");
        }
    }

    #[test]
    fn test_correct_guess_cannot_lose() {
        // Six misses on the brink, then the winning letter: the round must
        // end in a win, never a loss.
        let mut round = Round::new("A");
        for letter in ['B', 'C', 'D', 'E', 'F', 'G'] {
            round.guess(letter);
        }
        assert_eq!(round.wrong_guesses(), MAX_WRONG - 1);
        assert_eq!(round.guess('A'), Some(Outcome::Won));
        assert!(round.is_won());
        assert!(!round.is_lost());
    }

    #[test]
    fn test_duplicate_guess_is_a_noop() {
        let mut round = Round::new("CHINA");
        assert_eq!(round.guess('C'), Some(Outcome::Correct));
        assert_eq!(round.guess('C'), None);
        assert_eq!(round.guess('Z'), Some(Outcome::Incorrect));
        assert_eq!(round.guess('Z'), None);
        assert_eq!(round.wrong_guesses(), 1);
        assert_eq!(round.to_string(), "C _ _ _ _");
    }

    #[test]
    fn test_non_letter_input_is_a_noop() {
        let mut round = Round::new("CHINA");
        for input in ['3', '?', ' ', 'é'] {
            assert_eq!(round.guess(input), None);
        }
        assert_eq!(round.wrong_guesses(), 0);
        assert!(round.guessed().is_empty());
    }

    #[test]
    fn test_lowercase_is_normalized() {
        let mut round = Round::new("CHINA");
        assert_eq!(round.guess('c'), Some(Outcome::Correct));
        assert_eq!(round.to_string(), "C _ _ _ _");
        assert!(round.has_guessed('c'));
        assert!(round.has_guessed('C'));
    }

    #[test]
    fn test_no_guesses_after_round_over() {
        let mut round = Round::new("ITALY");
        for letter in ['I', 'T', 'A', 'L', 'Y'] {
            round.guess(letter);
        }
        assert!(round.is_won());
        assert_eq!(round.guess('Z'), None);
        assert_eq!(round.wrong_guesses(), 0);

        let mut round = Round::new("ITALY");
        for letter in ['B', 'C', 'D', 'E', 'F', 'G', 'H'] {
            round.guess(letter);
        }
        assert!(round.is_lost());
        assert_eq!(round.guess('I'), None);
        assert_eq!(round.to_string(), "_ _ _ _ _");
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut round = Round::new("CHINA");
        round.guess('C');
        round.guess('Z');
        round.reset("NORWAY");
        assert_eq!(round.to_string(), "_ _ _ _ _ _");
        assert_eq!(round.wrong_guesses(), 0);
        assert!(round.guessed().is_empty());
        assert!(!round.is_over());
        // Letters spent in the previous round are available again.
        assert_eq!(round.guess('Z'), Some(Outcome::Incorrect));
    }

    #[test]
    fn test_outcome_terminality() {
        assert!(Outcome::Won.is_terminal());
        assert!(Outcome::Lost.is_terminal());
        assert!(!Outcome::Correct.is_terminal());
        assert!(!Outcome::Incorrect.is_terminal());
    }
}
