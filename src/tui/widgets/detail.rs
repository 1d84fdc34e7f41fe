// Detail page widget: profile card plus the season tables.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::format::PLACEHOLDER;
use crate::site::detail::{season_label, FieldSpec, SeasonLine, HITTER_FIELDS, PITCHER_FIELDS};
use crate::tui::ViewState;

/// Render the player detail page into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(detail) = &state.detail else {
        let empty = Paragraph::new("선수를 선택하세요")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // profile card
            Constraint::Min(4),    // hitter table
            Constraint::Min(4),    // pitcher table
        ])
        .split(area);

    render_card(frame, vertical[0], detail);
    render_season_table(frame, vertical[1], "타자 기록", HITTER_FIELDS, &detail.hitter_lines);
    render_season_table(
        frame,
        vertical[2],
        "투수 기록",
        PITCHER_FIELDS,
        &detail.pitcher_lines,
    );
}

fn render_card(frame: &mut Frame, area: Rect, detail: &crate::site::detail::PlayerDetail) {
    let (number, position) = detail
        .profile
        .as_ref()
        .map(|p| (p.number.as_str(), p.position.as_str()))
        .unwrap_or((PLACEHOLDER, PLACEHOLDER));

    let mut summary = format!("통합 WAR {}", detail.combined_war);
    if let Some(ops) = &detail.career_ops {
        summary.push_str(&format!(" | 누적 OPS {ops}"));
    }
    if let Some(era) = &detail.career_era {
        summary.push_str(&format!(" | 누적 ERA {era}"));
    }

    let lines = vec![
        Line::from(format!("등번호 {number} | 포지션 {position}")),
        Line::from(summary),
    ];
    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(detail.name.clone())
            .title_style(Style::default().add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(card, area);
}

fn render_season_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    fields: &[FieldSpec],
    lines: &[SeasonLine],
) {
    if lines.is_empty() {
        // The site hides a domain with no data; the viewer shows the frame
        // so the page shape stays stable.
        let empty = Paragraph::new("기록 없음")
            .block(Block::default().borders(Borders::ALL).title(title.to_string()));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        std::iter::once(Cell::from("시즌"))
            .chain(fields.iter().map(|spec| Cell::from(spec.label))),
    )
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = lines
        .iter()
        .map(|line| {
            Row::new(
                std::iter::once(Cell::from(season_label(&line.season)))
                    .chain(line.cells.iter().map(|cell| Cell::from(cell.clone()))),
            )
        })
        .collect();

    let mut widths = vec![Constraint::Length(8)];
    widths.extend(fields.iter().map(|_| Constraint::Length(7)));

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string()),
    );
    frame.render_widget(table, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::tui::tests::test_data;
    use crate::tui::ViewState;

    #[test]
    fn render_without_detail_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(120, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let data = test_data();
        let state = ViewState::new(&data, &SiteConfig { leaderboard_size: 5 });
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_with_detail_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(160, 40);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let data = test_data();
        let mut state = ViewState::new(&data, &SiteConfig { leaderboard_size: 5 });
        state.open_selected(&data);
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
