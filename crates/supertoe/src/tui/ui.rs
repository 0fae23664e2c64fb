//! Stateless UI rendering for the board.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use supertoe_core::{GameState, Mark};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(8), // Log
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(app.game().variant().title()),
        Line::from(app.matchup()),
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.game());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let log: Vec<Line> = app.log().map(Line::from).collect();
    let log = Paragraph::new(log).block(
        Block::default()
            .title("Moves ('q' quits)")
            .borders(Borders::ALL),
    );
    frame.render_widget(log, chunks[3]);
}

/// Board as styled lines, with row and column indices around the grid.
pub fn board_lines(game: &GameState) -> Vec<Line<'static>> {
    let size = game.size();
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::with_capacity(size * 2 + 1);

    let header: String = (0..size).map(|col| format!(" {col}  ")).collect();
    lines.push(Line::from(Span::styled(format!("   {header}"), label)));

    for (row, marks) in game.rows().enumerate() {
        if row > 0 {
            let rule = vec!["───"; size].join("┼");
            lines.push(Line::from(Span::styled(format!("  {rule}"), label)));
        }
        let mut spans = vec![Span::styled(format!("{row} "), label)];
        for (col, mark) in marks.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", label));
            }
            spans.push(cell(*mark));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn cell(mark: Mark) -> Span<'static> {
    match mark {
        Mark::Empty => Span::raw("   "),
        Mark::X => Span::styled(
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Mark::O => Span::styled(
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, game: &GameState) {
    let lines = board_lines(game);
    let height = lines.len() as u16;
    let width = (game.size() * 4 + 2) as u16;
    let board = Paragraph::new(lines);
    frame.render_widget(board, center_rect(area, width, height));
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
