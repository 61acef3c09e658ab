//! The eight gallows drawings, one per count of wrong guesses.

use hangman::MAX_WRONG;

pub const FRAME_HEIGHT: usize = 7;

/// Drawing stages from empty ground to the complete figure. Stage `n` is
/// shown after `n` wrong guesses.
pub const STAGES: [[&str; FRAME_HEIGHT]; MAX_WRONG + 1] = [
    [
        "         ",
        "         ",
        "         ",
        "         ",
        "         ",
        "         ",
        "=========",
    ],
    [
        "  +---+  ",
        "  |   |  ",
        "      |  ",
        "      |  ",
        "      |  ",
        "      |  ",
        "=========",
    ],
    [
        "  +---+  ",
        "  |   |  ",
        "  O   |  ",
        "      |  ",
        "      |  ",
        "      |  ",
        "=========",
    ],
    [
        "  +---+  ",
        "  |   |  ",
        "  O   |  ",
        "  |   |  ",
        "      |  ",
        "      |  ",
        "=========",
    ],
    [
        "  +---+  ",
        "  |   |  ",
        "  O   |  ",
        " /|   |  ",
        "      |  ",
        "      |  ",
        "=========",
    ],
    [
        "  +---+  ",
        "  |   |  ",
        "  O   |  ",
        " /|\\  |  ",
        "      |  ",
        "      |  ",
        "=========",
    ],
    [
        "  +---+  ",
        "  |   |  ",
        "  O   |  ",
        " /|\\  |  ",
        " /    |  ",
        "      |  ",
        "=========",
    ],
    [
        "  +---+  ",
        "  |   |  ",
        "  O   |  ",
        " /|\\  |  ",
        " / \\  |  ",
        "      |  ",
        "=========",
    ],
];

/// The drawing for a given number of wrong guesses, clamped to the last
/// stage.
pub fn stage(wrong_guesses: usize) -> &'static [&'static str; FRAME_HEIGHT] {
    &STAGES[wrong_guesses.min(MAX_WRONG)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_stage_per_wrong_guess_count() {
        assert_eq!(STAGES.len(), MAX_WRONG + 1);
    }

    #[test]
    fn test_stages_have_uniform_size() {
        let width = STAGES[0][0].chars().count();
        for frame in &STAGES {
            for line in frame {
                assert_eq!(line.chars().count(), width);
            }
        }
    }

    #[test]
    fn test_each_miss_changes_the_drawing() {
        for pair in STAGES.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_figure_appears_only_after_misses() {
        assert!(!STAGES[0].iter().any(|line| line.contains('O')));
        assert!(STAGES[MAX_WRONG].iter().any(|line| line.contains('O')));
    }

    #[test]
    fn test_stage_clamps_past_the_end() {
        assert_eq!(stage(MAX_WRONG + 5), stage(MAX_WRONG));
        assert_eq!(stage(0), &STAGES[0]);
    }
}
