//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CellState, Grid, ROWS, WORD_LEN};
use crate::output::formatters::{KEYBOARD_ROWS, keyboard_states};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Messages and stats
        ])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDISH")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(state: CellState) -> Style {
    let (fg, bg) = match state {
        CellState::Empty => (Color::White, Color::Reset),
        CellState::Absent => (Color::White, Color::DarkGray),
        CellState::Present => (Color::Black, Color::Yellow),
        CellState::Correct => (Color::Black, Color::Green),
    };
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ROWS as u16 + 2), // Board
            Constraint::Min(5),                  // Keyboard
        ])
        .split(area);

    let empty = Grid::empty();
    let (grid, current_row) = app
        .screen
        .snapshot()
        .map_or((&empty, None), |s| {
            (&s.grid, (!s.game_over).then_some(s.row_index))
        });

    render_board(f, grid, current_row, chunks[0]);
    render_keyboard(f, grid, chunks[1]);
}

fn render_board(f: &mut Frame, grid: &Grid, current_row: Option<usize>, area: Rect) {
    let lines: Vec<Line> = grid
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans: Vec<Span> = (0..WORD_LEN)
                .flat_map(|pos| {
                    let letter = row.letter_at(pos).unwrap_or('·');
                    [
                        Span::styled(format!(" {letter} "), cell_style(row.classes()[pos])),
                        Span::raw(" "),
                    ]
                })
                .collect();
            if current_row == Some(i) {
                spans.push(Span::styled("◀", Style::default().fg(Color::Yellow)));
            }
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, grid: &Grid, area: Rect) {
    let states = keyboard_states(grid);
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            Line::from(
                keys.chars()
                    .map(|key| {
                        let state = states.get(&key).copied().unwrap_or(CellState::Empty);
                        Span::styled(format!(" {key} "), cell_style(state))
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Messages
            Constraint::Percentage(50), // Statistics
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let max = app
        .stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    let lines: Vec<Line> = (1..=ROWS)
        .map(|guesses| {
            let count = app.stats.guess_distribution[guesses];
            let width = count * 20 / max;
            Line::from(vec![
                Span::raw(format!("{guesses}: ")),
                Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let stats = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(stats, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode() {
        InputMode::Target => (" Target word (Enter for random) ", Color::Cyan),
        InputMode::Guess => (" Your guess ", Color::Yellow),
        InputMode::GameOver => (" Game over | Enter/n: new game, q: quit ", Color::Green),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let win_rate = if app.stats.total_games > 0 {
        app.stats.games_won * 100 / app.stats.total_games
    } else {
        0
    };
    let text = format!(
        "Games: {} | Win Rate: {win_rate}% | Esc: Quit | Ctrl-N: New Game",
        app.stats.total_games
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
