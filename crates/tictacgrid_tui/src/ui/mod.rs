//! UI rendering using ratatui.

mod board;

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tictacgrid::GameStatus;

pub use board::render_board;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!("Tictacgrid - Tic Tac Toe ({})", app.game().grid_size()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], app);

    let status_color = match app.game().status() {
        GameStatus::InProgress => Color::Yellow,
        GameStatus::Won(_) => Color::Green,
        GameStatus::Draw => Color::Red,
    };
    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = if app.game().has_started() {
        "Arrows: Move | Enter: Place | R: Restart | Q: Quit"
    } else {
        "Arrows: Move | Enter: Place | +/-: Grid size | R: Restart | Q: Quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
