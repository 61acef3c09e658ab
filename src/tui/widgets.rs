//! # UI Widgets Module
//!
//! This module contains functions for drawing the different UI components
//! (widgets) on the screen: the letter board, the gallows, the session info
//! panel, the hidden word, and the popup dialogs and menu.

use crate::app::{letter_for, App, AppMode, MENU_ITEMS, NEW_GAME_CELL};
use crate::tui::{gallows, layout};
use hangman::MAX_WRONG;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

pub fn render(app: &mut App, frame: &mut Frame) {
    let areas = layout::screen_areas(frame.size());

    draw_title(frame, areas.title);
    draw_board(frame, app, areas.board);
    draw_gallows(frame, app, areas.gallows);
    draw_info(frame, app, areas.info);
    draw_word(frame, app, areas.word);

    // Dialogs and the menu pop up over the board.
    match app.mode {
        AppMode::Welcome => draw_welcome_dialog(frame),
        AppMode::Menu => draw_menu(frame, app),
        AppMode::RoundOver => draw_round_over_dialog(frame, app),
        AppMode::Farewell => draw_farewell_dialog(frame),
        AppMode::InGame => {}
    }
}

fn draw_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("Hangman - Guess the Country")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, area);
}

/// Draws the letter grid with the NEW GAME cell in the bottom row.
///
/// Already tried letters are dimmed, the cursor cell is highlighted. Cells
/// that do not fit the panel on a cramped terminal are skipped.
fn draw_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Letters");
    let inner = block.inner(area);
    f.render_widget(block, area);

    for cell in 0..=NEW_GAME_CELL {
        let rect = layout::cell_rect(area, cell);
        if rect.right() > inner.right() || rect.bottom() > inner.bottom() {
            continue;
        }

        let is_cursor = cell == app.cursor;
        match letter_for(cell) {
            Some(letter) => {
                let style = if is_cursor {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else if app.round.has_guessed(letter) {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                f.render_widget(Paragraph::new(format!(" {letter} ")).style(style), rect);
            }
            None => {
                let style = if is_cursor {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green)
                };
                f.render_widget(Paragraph::new(" NEW GAME ").style(style), rect);
            }
        }
    }
}

/// Draws the gallows stage for the current miss count plus the counter line.
fn draw_gallows(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Gallows");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = gallows::stage(app.round.wrong_guesses())
        .iter()
        .map(|&row| Line::from(row))
        .collect();
    lines.push(Line::from(""));

    let counter = format!(
        "Wrong guesses: {} / {}",
        app.round.wrong_guesses(),
        MAX_WRONG
    );
    let counter_style = if app.round.remaining_guesses() <= 2 {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    lines.push(Line::from(Span::styled(counter, counter_style)));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}

fn draw_info(f: &mut Frame, app: &App, area: Rect) {
    let tried: Vec<String> = app
        .round
        .guessed()
        .iter()
        .map(|letter| letter.to_string())
        .collect();

    let mut text = vec![
        Line::from(format!("Wins: {}", app.wins)),
        Line::from(format!("Losses: {}", app.losses)),
        Line::from(""),
        Line::from("Tried letters:"),
        Line::from(tried.join(" ")),
        Line::from(""),
    ];

    let instructions = match app.mode {
        AppMode::InGame => "Type a letter, or pick one with the arrows and Enter. Esc opens the menu.",
        AppMode::Menu => "Up/Down to choose, Enter to confirm, Esc to close.",
        AppMode::Welcome | AppMode::RoundOver | AppMode::Farewell => "Press Enter to continue.",
    };
    text.push(Line::from(instructions));

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Session"));
    f.render_widget(paragraph, area);
}

/// Draws the hidden word with its guessed letters revealed.
fn draw_word(f: &mut Frame, app: &App, area: Rect) {
    let word = Paragraph::new(app.round.to_string())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Country"));
    f.render_widget(word, area);
}

/// Draws a centered dialog over the board with a dismiss hint at the bottom.
fn draw_dialog(f: &mut Frame, title: &str, border_style: Style, body: &[&str]) {
    let hint = "[ Press Enter ]";
    let body_width = body
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count())
        .max(hint.len());
    let width = (body_width + 4) as u16;
    let height = body.len() as u16 + 4;
    let area = layout::centered_rect(width, height, f.size());

    let mut lines: Vec<Line> = body.iter().map(|&line| Line::from(line)).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::Yellow),
    )));

    let dialog = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(border_style),
    );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

fn draw_welcome_dialog(f: &mut Frame) {
    draw_dialog(
        f,
        "Hangman",
        Style::default(),
        &[
            "Welcome to Hangman!",
            "Your job is to guess the country.",
            "You can answer incorrectly 7 times so make it count!",
        ],
    );
}

fn draw_round_over_dialog(f: &mut Frame, app: &App) {
    if app.round.is_won() {
        draw_dialog(
            f,
            "Hangman",
            Style::default().fg(Color::Green),
            &["YOU WON!"],
        );
    } else {
        draw_dialog(
            f,
            "Hangman",
            Style::default().fg(Color::Red),
            &["Game Over"],
        );
    }
}

fn draw_farewell_dialog(f: &mut Frame) {
    draw_dialog(
        f,
        "Hangman - Guess the Country",
        Style::default(),
        &["Thanks for playing!"],
    );
}

fn draw_menu(f: &mut Frame, app: &mut App) {
    let area = layout::menu_area(f.size());

    let items: Vec<ListItem> = MENU_ITEMS.iter().map(|&item| ListItem::new(item)).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Menu"))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )
        .highlight_symbol("> ");

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut app.menu_state);
}
