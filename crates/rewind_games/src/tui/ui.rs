//! Stateless rendering of the viewed snapshot and the move list.

use super::app::{App, Focus};
use crate::config::GameConfig;
use crate::status::StatusLine;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Cell, Mark, Position};

const HELP: &str = "1-9/Enter: play  Tab: board/moves  p/n: step back/forward  r: restart  q: quit";

/// Draws the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App, config: &GameConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(config.title().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, config.show_move_numbers());
    draw_moves(frame, body[1], app);

    let status = Paragraph::new(status_text(app))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn status_text(app: &App) -> String {
    let game = app.game();
    let mut text = StatusLine::for_game(game).to_string();
    if game.is_rewound() {
        text.push_str(&format!(
            "  (viewing move {} of {})",
            game.cursor(),
            game.history().last_step()
        ));
    }
    if let Some(message) = app.message() {
        text.push_str("  | ");
        text.push_str(message);
    }
    text
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, hints: bool) {
    let border_style = if app.focus() == Focus::Board {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, app, row, hints);
    }
    for area in [rows[1], rows[3]] {
        let sep = Paragraph::new("───────┼───────┼───────")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize, hints: bool) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos, hints);
        }
    }
    for area in [cols[1], cols[3]] {
        let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, hints: bool) {
    let game = app.game();
    let hint = (pos.to_index() + 1).to_string();

    let (symbol, base_style) = match game.current_snapshot().get(pos) {
        Cell::Empty if hints => (hint.as_str(), Style::default().fg(Color::DarkGray)),
        Cell::Empty => (" ", Style::default()),
        Cell::Marked(Mark::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Cell::Marked(Mark::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let winning = game
        .current_winning_line()
        .is_some_and(|line| line.contains(&pos));

    let style = if pos == app.selected() && app.focus() == Focus::Board {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    // Middle line of the 3-line cell
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::Moves;
    let items: Vec<ListItem> = app
        .game()
        .move_list()
        .iter()
        .map(|entry| {
            let marker = if entry.is_current { "● " } else { "  " };
            let style = if entry.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, entry.label),
                style,
            )))
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Moves"),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.list_selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
