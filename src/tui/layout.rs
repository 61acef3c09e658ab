//! # Layout Module
//!
//! Screen geometry for the interface: splitting the terminal into the fixed
//! panels, placing the 27 board cells, and centering popup rectangles. All
//! of it is plain arithmetic on [`Rect`]s so both rendering and mouse hit
//! testing resolve cells the same way.
//!
//! ## Board Geometry
//! The letter board is a 5-wide grid with one gap column and one gap row
//! between cells, A through Z in reading order. The NEW GAME cell takes the
//! slot right after Z on the bottom row.

use crate::app::{GRID_COLS, MENU_ITEMS, NEW_GAME_CELL};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Horizontal distance from one cell's left edge to the next.
pub const CELL_STRIDE_X: u16 = 4;
/// Vertical distance from one cell row to the next.
pub const CELL_STRIDE_Y: u16 = 2;
/// Width of a letter cell.
pub const CELL_WIDTH: u16 = 3;
/// Width of the NEW GAME cell.
pub const NEW_GAME_WIDTH: u16 = 10;

/// Board rows, the letter rows plus the bottom row holding Z and NEW GAME.
pub const GRID_ROWS: u16 = (NEW_GAME_CELL / GRID_COLS + 1) as u16;

/// Full width of the board panel, borders included.
pub const BOARD_WIDTH: u16 = (GRID_COLS as u16 - 1) * CELL_STRIDE_X + CELL_WIDTH + 2;
/// Full height of the board panel, borders included.
pub const BOARD_HEIGHT: u16 = (GRID_ROWS - 1) * CELL_STRIDE_Y + 1 + 2;

/// Width of the session info panel on the right.
pub const INFO_WIDTH: u16 = 26;

/// Width of the menu popup.
pub const MENU_WIDTH: u16 = 24;

/// The fixed regions of the screen.
pub struct ScreenAreas {
    pub title: Rect,
    pub board: Rect,
    pub gallows: Rect,
    pub info: Rect,
    pub word: Rect,
}

/// Splits the terminal into the title bar, the three main panels, and the
/// word bar along the bottom.
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3),
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BOARD_WIDTH),
            Constraint::Min(20),
            Constraint::Length(INFO_WIDTH),
        ])
        .split(rows[1]);

    ScreenAreas {
        title: rows[0],
        board: panels[0],
        gallows: panels[1],
        info: panels[2],
        word: rows[2],
    }
}

/// Where a board cell sits inside the board panel.
pub fn cell_rect(board: Rect, cell: usize) -> Rect {
    let row = (cell / GRID_COLS) as u16;
    let col = (cell % GRID_COLS) as u16;
    let width = if cell == NEW_GAME_CELL {
        NEW_GAME_WIDTH
    } else {
        CELL_WIDTH
    };
    Rect::new(
        board.x + 1 + col * CELL_STRIDE_X,
        board.y + 1 + row * CELL_STRIDE_Y,
        width,
        1,
    )
}

/// The board cell under a screen position, if any.
///
/// Clicks on the borders and the gaps between cells resolve to `None`, as do
/// cells pushed outside the panel by a cramped terminal.
pub fn cell_at(board: Rect, column: u16, row: u16) -> Option<usize> {
    for cell in 0..=NEW_GAME_CELL {
        let rect = cell_rect(board, cell);
        // Same bound the renderer uses: cells must fit inside the borders.
        if rect.right() + 1 > board.right() || rect.bottom() + 1 > board.bottom() {
            continue;
        }
        if column >= rect.x
            && column < rect.x + rect.width
            && row >= rect.y
            && row < rect.y + rect.height
        {
            return Some(cell);
        }
    }
    None
}

/// A rectangle of the given size centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Where the menu popup sits on screen.
pub fn menu_area(area: Rect) -> Rect {
    centered_rect(MENU_WIDTH, MENU_ITEMS.len() as u16 + 2, area)
}

/// The menu entry under a screen position, if any.
pub fn menu_item_at(menu: Rect, column: u16, row: u16) -> Option<usize> {
    if menu.width < 2 || menu.height < 2 {
        return None;
    }
    if column <= menu.x || column >= menu.x + menu.width - 1 {
        return None;
    }
    let inner_top = menu.y + 1;
    if row < inner_top || row >= inner_top + MENU_ITEMS.len() as u16 {
        return None;
    }
    Some((row - inner_top) as usize)
}
