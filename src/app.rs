//! # Application State
//!
//! This module holds the state that drives the interface: the current round,
//! the board cursor, session win/loss tallies, and which screen (board,
//! dialog, or menu) the player currently sees. The round rules themselves
//! live in the library crate; this layer only routes player actions into
//! them and reacts to the outcomes.

use hangman::{words, Outcome, Round};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use ratatui::widgets::ListState;

/// Number of letter cells on the board, A through Z.
pub const LETTER_CELLS: usize = 26;

/// Index of the extra NEW GAME cell that sits right after Z.
pub const NEW_GAME_CELL: usize = 26;

/// Cells per board row.
pub const GRID_COLS: usize = 5;

/// Entries of the in-game menu overlay.
pub const MENU_ITEMS: [&str; 2] = ["New game", "Quit"];

/// The letter shown on a board cell, or `None` for the NEW GAME cell.
pub fn letter_for(cell: usize) -> Option<char> {
    if cell < LETTER_CELLS {
        Some((b'A' + cell as u8) as char)
    } else {
        None
    }
}

/// Which screen the player currently sees.
///
/// The board keeps rendering underneath the dialog modes, so the player can
/// still see the final mask and gallows behind a round-over popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Greeting dialog shown once at startup.
    Welcome,
    /// Active play: the board takes letter input.
    InGame,
    /// The New game / Quit menu overlay.
    Menu,
    /// Win or loss dialog; dismissing it starts the next round.
    RoundOver,
    /// Goodbye dialog; dismissing it exits.
    Farewell,
}

/// The main application state
///
/// Holds the current round, the cursor on the letter board, the menu
/// selection, and the session score. Word picking goes through an owned
/// seedable generator so a whole session can be replayed.
pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub round: Round,
    /// Selected board cell, `0..=NEW_GAME_CELL`.
    pub cursor: usize,
    pub menu_state: ListState,
    pub wins: u32,
    pub losses: u32,
    rng: Xoshiro256StarStar,
    /// When set, every round replays this word instead of sampling one.
    forced_word: Option<String>,
}

impl App {
    pub fn new(forced_word: Option<String>, seed: Option<u64>, skip_welcome: bool) -> Self {
        let mut rng = match seed {
            Some(seed) => Xoshiro256StarStar::seed_from_u64(seed),
            None => Xoshiro256StarStar::seed_from_u64(rand::thread_rng().gen()),
        };

        let first_word = match &forced_word {
            Some(word) => word.clone(),
            None => words::sample(&mut rng).to_string(),
        };

        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Self {
            should_quit: false,
            mode: if skip_welcome {
                AppMode::InGame
            } else {
                AppMode::Welcome
            },
            round: Round::new(&first_word),
            cursor: 0,
            menu_state,
            wins: 0,
            losses: 0,
            rng,
            forced_word,
        }
    }

    /// Starts a fresh round on a newly picked word and returns to the board.
    pub fn new_round(&mut self) {
        let word = match &self.forced_word {
            Some(word) => word.clone(),
            None => words::sample(&mut self.rng).to_string(),
        };
        self.round.reset(&word);
        self.cursor = 0;
        self.mode = AppMode::InGame;
    }

    /// Feeds a letter to the round and tallies the result.
    ///
    /// Only does something during active play; dialogs and the menu swallow
    /// letters. A finished round switches to the round-over dialog.
    pub fn guess(&mut self, letter: char) {
        if self.mode != AppMode::InGame {
            return;
        }
        match self.round.guess(letter) {
            Some(Outcome::Won) => {
                self.wins += 1;
                self.mode = AppMode::RoundOver;
            }
            Some(Outcome::Lost) => {
                self.losses += 1;
                self.mode = AppMode::RoundOver;
            }
            Some(Outcome::Correct) | Some(Outcome::Incorrect) | None => {}
        }
    }

    /// Handles a letter typed on the keyboard. The cursor snaps to the
    /// letter's cell so the board shows what was just played.
    pub fn guess_typed(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return;
        }
        if self.mode == AppMode::InGame {
            self.cursor = (letter as u8 - b'A') as usize;
        }
        self.guess(letter);
    }

    /// Activates the cell under the cursor: a letter cell plays its letter,
    /// the NEW GAME cell restarts the round.
    pub fn activate_cursor(&mut self) {
        self.activate_cell(self.cursor);
    }

    /// Activates a specific cell, used by mouse clicks on the board.
    pub fn activate_cell(&mut self, cell: usize) {
        if self.mode != AppMode::InGame || cell > NEW_GAME_CELL {
            return;
        }
        self.cursor = cell;
        match letter_for(cell) {
            Some(letter) => self.guess(letter),
            None => self.new_round(),
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < NEW_GAME_CELL {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(GRID_COLS);
    }

    pub fn move_cursor_down(&mut self) {
        self.cursor = (self.cursor + GRID_COLS).min(NEW_GAME_CELL);
    }

    /// Opens the menu overlay with the first entry selected.
    pub fn open_menu(&mut self) {
        if self.mode == AppMode::InGame {
            self.mode = AppMode::Menu;
            self.menu_state.select(Some(0));
        }
    }

    pub fn close_menu(&mut self) {
        if self.mode == AppMode::Menu {
            self.mode = AppMode::InGame;
        }
    }

    pub fn menu_next(&mut self) {
        let i = match self.menu_state.selected() {
            Some(i) => (i + 1) % MENU_ITEMS.len(),
            None => 0,
        };
        self.menu_state.select(Some(i));
    }

    pub fn menu_prev(&mut self) {
        let i = match self.menu_state.selected() {
            Some(i) => (i + MENU_ITEMS.len() - 1) % MENU_ITEMS.len(),
            None => 0,
        };
        self.menu_state.select(Some(i));
    }

    /// Runs the selected menu entry.
    pub fn menu_activate(&mut self) {
        match self.menu_state.selected() {
            Some(0) => self.new_round(),
            Some(1) => self.request_quit(),
            _ => {}
        }
    }

    /// Asks to leave. The farewell dialog shows first; the loop only stops
    /// once it is dismissed.
    pub fn request_quit(&mut self) {
        self.mode = AppMode::Farewell;
    }

    /// Closes whichever dialog is open.
    pub fn dismiss_dialog(&mut self) {
        match self.mode {
            AppMode::Welcome => self.mode = AppMode::InGame,
            AppMode::RoundOver => self.new_round(),
            AppMode::Farewell => self.should_quit = true,
            AppMode::InGame | AppMode::Menu => {}
        }
    }
}
