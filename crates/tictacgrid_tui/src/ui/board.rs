//! Board rendering for any supported grid size.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tictacgrid::Mark;

/// Renders the board with the cursor highlighted.
///
/// Cells are three columns wide and one row tall, separated by thin
/// rules, so a 10×10 board still fits a standard terminal.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let n = app.game().grid_size().get();
    let width = (4 * n - 1) as u16;
    let height = (2 * n - 1) as u16;
    let board_area = center_rect(area, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(interleaved(n, Constraint::Length(1)))
        .split(board_area);

    for row in 0..n {
        render_cell_row(f, rows[row * 2], app, row);
        if row + 1 < n {
            render_separator(f, rows[row * 2 + 1]);
        }
    }
}

fn render_cell_row(f: &mut Frame, area: Rect, app: &App, row: usize) {
    let n = app.game().grid_size().get();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(interleaved(n, Constraint::Length(3)))
        .split(area);

    for col in 0..n {
        render_cell(f, cols[col * 2], app, row * n + col);
        if col + 1 < n {
            render_vertical_sep(f, cols[col * 2 + 1]);
        }
    }
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, index: usize) {
    let (symbol, base_style) = match app.game().board().mark_at(index) {
        None => (" · ", Style::default().fg(Color::DarkGray)),
        Some(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if index == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

/// Alternates cell and separator constraints for an n-cell track.
fn interleaved(n: usize, cell: Constraint) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity(2 * n - 1);
    for i in 0..n {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(cell);
    }
    constraints
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
