// Summary page widget: the sortable/filterable roster table.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::site::summary::SummaryColumn;
use crate::tui::ViewState;

/// Render the summary table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let visible = state.visible();

    let header = Row::new(
        SummaryColumn::ALL
            .iter()
            .map(|column| Cell::from(column.title())),
    )
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = visible
        .iter()
        .map(|summary| Row::new(summary.display_cells().into_iter().map(Cell::from)))
        .collect();

    let widths = [
        Constraint::Min(10),   // 이름
        Constraint::Length(6), // 등번호
        Constraint::Length(8), // 포지션
        Constraint::Length(7), // WAR
        Constraint::Length(7), // 타율
        Constraint::Length(7), // OPS
        Constraint::Length(6), // 홈런
        Constraint::Length(6), // 타점
        Constraint::Length(8), // 이닝
        Constraint::Length(6), // 삼진
        Constraint::Length(7), // ERA
        Constraint::Length(7), // WHIP
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("선수 ({})", visible.len())),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    let mut table_state = TableState::default();
    table_state.select(state.clamped_selection());
    frame.render_stateful_widget(table, area, &mut table_state);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
