//! # Input Handling Module
//!
//! This module is responsible for handling all user input, including keyboard
//! and mouse events. It translates these events into actions within the
//! application, routed by the current mode.

use crate::app::{App, AppMode};
use crate::tui::layout;
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

/// Handles keyboard input based on the current application mode
///
/// Routes key presses to the appropriate handler function depending on
/// which screen is currently active.
///
/// # Arguments
/// * `app` - Mutable reference to the application state
/// * `key_code` - The key that was pressed
pub fn handle_key_press(app: &mut App, key_code: KeyCode) {
    match app.mode {
        AppMode::InGame => handle_ingame_input(key_code, app),
        AppMode::Menu => handle_menu_input(key_code, app),
        AppMode::Welcome | AppMode::RoundOver | AppMode::Farewell => {
            handle_dialog_input(key_code, app)
        }
    }
}

/// Handles mouse clicks on the board, the menu, and open dialogs
///
/// # Arguments
/// * `app` - Mutable reference to the application state
/// * `kind` - Type of mouse event (only left-button presses act)
/// * `col` - Column position of the mouse event
/// * `row` - Row position of the mouse event
/// * `terminal_size` - Size of the terminal for coordinate calculations
pub fn handle_mouse_event(
    app: &mut App,
    kind: MouseEventKind,
    col: u16,
    row: u16,
    terminal_size: Rect,
) {
    if kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    match app.mode {
        AppMode::InGame => {
            let areas = layout::screen_areas(terminal_size);
            if let Some(cell) = layout::cell_at(areas.board, col, row) {
                app.activate_cell(cell);
            }
        }
        AppMode::Menu => {
            let menu = layout::menu_area(terminal_size);
            match layout::menu_item_at(menu, col, row) {
                Some(index) => {
                    app.menu_state.select(Some(index));
                    app.menu_activate();
                }
                // A click off the popup closes it.
                None => app.close_menu(),
            }
        }
        AppMode::Welcome | AppMode::RoundOver | AppMode::Farewell => app.dismiss_dialog(),
    }
}

/// Handles keyboard input during active play
///
/// Letter keys are guesses, so the menu is reached with Esc rather than a
/// letter shortcut. Arrows move the board cursor and Enter or Space activate
/// the selected cell.
///
/// # Arguments
/// * `key_code` - The key that was pressed
/// * `app` - Mutable reference to the application state
fn handle_ingame_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Esc => app.open_menu(),
        KeyCode::Up => app.move_cursor_up(),
        KeyCode::Down => app.move_cursor_down(),
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_cursor(),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => app.guess_typed(c),
        _ => {}
    }
}

/// Handles keyboard input while the menu popup is open
///
/// # Arguments
/// * `key_code` - The key that was pressed
/// * `app` - Mutable reference to the application state
fn handle_menu_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc => app.close_menu(),
        KeyCode::Up => app.menu_prev(),
        KeyCode::Down => app.menu_next(),
        KeyCode::Enter => app.menu_activate(),
        _ => {}
    }
}

/// Handles keyboard input while a dialog is open
///
/// Any of the dismiss keys closes the dialog; everything else is swallowed
/// so stray typing cannot reach the round.
///
/// # Arguments
/// * `key_code` - The key that was pressed
/// * `app` - Mutable reference to the application state
fn handle_dialog_input(key_code: KeyCode, app: &mut App) {
    match key_code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => app.dismiss_dialog(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_app() -> App {
        App::new(Some("CHINA".to_string()), None, true)
    }

    #[test]
    fn test_typed_letter_becomes_a_guess() {
        let mut app = fixed_app();
        handle_key_press(&mut app, KeyCode::Char('c'));
        assert!(app.round.has_guessed('C'));
    }

    #[test]
    fn test_esc_opens_and_closes_the_menu() {
        let mut app = fixed_app();
        handle_key_press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Menu);
        handle_key_press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::InGame);
    }

    #[test]
    fn test_q_only_quits_from_the_menu() {
        let mut app = fixed_app();
        handle_key_press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.mode, AppMode::InGame);
        assert!(app.round.has_guessed('Q'));

        handle_key_press(&mut app, KeyCode::Esc);
        handle_key_press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.mode, AppMode::Farewell);
    }

    #[test]
    fn test_enter_dismisses_dialogs() {
        let mut app = App::new(Some("CHINA".to_string()), None, false);
        assert_eq!(app.mode, AppMode::Welcome);
        handle_key_press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.mode, AppMode::Welcome);
        handle_key_press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::InGame);
    }

    #[test]
    fn test_click_on_a_letter_cell_guesses_it() {
        let mut app = fixed_app();
        let terminal = Rect::new(0, 0, 80, 24);
        let areas = layout::screen_areas(terminal);
        let rect = layout::cell_rect(areas.board, 0);

        handle_mouse_event(
            &mut app,
            MouseEventKind::Down(MouseButton::Left),
            rect.x + 1,
            rect.y,
            terminal,
        );
        assert!(app.round.has_guessed('A'));
    }

    #[test]
    fn test_other_mouse_events_are_ignored() {
        let mut app = fixed_app();
        let terminal = Rect::new(0, 0, 80, 24);
        let areas = layout::screen_areas(terminal);
        let rect = layout::cell_rect(areas.board, 0);

        handle_mouse_event(&mut app, MouseEventKind::Moved, rect.x, rect.y, terminal);
        assert!(app.round.guessed().is_empty());
    }
}
