// Leaderboard page widget: one ranked table per section.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::site::leaderboard::LeaderboardSection;
use crate::tui::ViewState;

/// Render the leaderboard sections side by side.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    if state.leaderboard.is_empty() {
        return;
    }

    let share = 100 / state.leaderboard.len() as u16;
    let constraints: Vec<Constraint> = state
        .leaderboard
        .iter()
        .map(|_| Constraint::Percentage(share))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (section, column) in state.leaderboard.iter().zip(columns.iter()) {
        render_section(frame, *column, section);
    }
}

fn render_section(frame: &mut Frame, area: Rect, section: &LeaderboardSection) {
    let header = Row::new(vec![Cell::from("#"), Cell::from("이름"), Cell::from("기록")]).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = section
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(entry.name.clone()),
                Cell::from(section.display_value(entry)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(section.title.clone()),
    );
    frame.render_widget(table, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
