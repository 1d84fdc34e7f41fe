// Widget rendering: one module per page plus the shared frame chrome.

pub mod detail;
pub mod leaderboard;
pub mod summary;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{layout, Page, ViewState};

/// Render the complete frame for the active page.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = layout::build_layout(frame.area());

    render_title_bar(frame, layout.title_bar, state);
    match state.page {
        Page::Summary => summary::render(frame, layout.body, state),
        Page::Detail => detail::render(frame, layout.body, state),
        Page::Leaderboard => leaderboard::render(frame, layout.body, state),
    }
    render_help_bar(frame, layout.help_bar, state);
}

fn render_title_bar(frame: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let title = match state.page {
        Page::Summary => " ORCA 선수 기록 요약",
        Page::Detail => " 선수 상세 기록",
        Page::Leaderboard => " 리더보드",
    };
    let mut text = title.to_string();
    if state.page == Page::Summary {
        if let Some(column) = state.sort_column {
            let arrow = if state.sort_descending { "↓" } else { "↑" };
            text.push_str(&format!(" | sort: {} {}", column.title(), arrow));
        }
        if !state.filter_text.is_empty() || state.filter_mode {
            text.push_str(&format!(" | filter: \"{}\"", state.filter_text));
        }
    }

    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: ratatui::layout::Rect, state: &ViewState) {
    let text = match state.page {
        Page::Summary if state.filter_mode => " type to filter | Enter/Esc:Done",
        Page::Summary => {
            " q:Quit | j/k:Move | Enter:Detail | l:Leaderboard | s:Sort | S:Reverse | /:Filter"
        }
        _ => " q:Quit | b/Esc:Back",
    };
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
