//! # Terminal User Interface Module
//!
//! This module provides the terminal interface for the game, built using the
//! Ratatui library. It owns the event loop, terminal setup and teardown, and
//! delegates input handling and rendering to its submodules.
//!
//! ## Key Components
//! - **Terminal Management**: Initialization and cleanup of raw terminal mode
//! - **Event Loop**: Main loop handling input and rendering
//! - **Input Processing**: Keyboard and mouse event handling
//! - **Widget Rendering**: Letter board, gallows, dialogs, and menu
//!
//! Letters can be played three ways: typed directly, picked with the arrows
//! and Enter, or clicked with the mouse.

use crate::app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    Terminal,
};
use std::{io, time::Duration};

pub mod gallows;
pub mod input;
pub mod layout;
pub mod widgets;

/// Main entry point for the terminal user interface
///
/// Initializes the terminal, runs the event loop until the player quits, and
/// restores the terminal afterwards.
///
/// # Arguments
/// * `app` - Mutable reference to the application state
///
/// # Errors
/// Returns an error if terminal initialization, event handling, or cleanup
/// fails
pub fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = init_terminal()?;

    loop {
        if app.should_quit {
            break;
        }

        terminal.draw(|f| widgets::render(app, f))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        input::handle_key_press(app, key.code);
                    }
                }
                Event::Mouse(mouse) => {
                    let terminal_size = terminal.size()?;
                    let terminal_rect = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                    input::handle_mouse_event(app, mouse.kind, mouse.column, mouse.row, terminal_rect);
                }
                _ => {}
            }
        }
    }

    restore_terminal(&mut terminal)
}

/// Initializes the terminal for raw mode operation
///
/// Sets up the terminal for interactive use by enabling raw mode, switching to
/// alternate screen, enabling mouse capture, and hiding the cursor.
///
/// # Returns
/// Terminal instance ready for rendering, or IO error if setup fails
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute!(
        handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        crossterm::cursor::Hide
    )?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal to normal operation mode
///
/// Cleans up terminal state by showing the cursor, disabling raw mode,
/// leaving alternate screen, and disabling mouse capture.
///
/// # Arguments
/// * `terminal` - Terminal instance to restore
///
/// # Returns
/// IO result indicating success or failure of cleanup operations
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    terminal.show_cursor()?;
    disable_raw_mode()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute!(
        handle,
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )?;
    Ok(())
}
