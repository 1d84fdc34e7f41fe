// Screen layout: title row, page body, help bar.
//
// +--------------------------------------------------+
// | Title Bar (1 row)                                 |
// +--------------------------------------------------+
// | Page body (fill)                                  |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for the viewer.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: page title and context (sort, filter).
    pub title_bar: Rect,
    /// The active page's content area.
    pub body: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the viewer layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(5),    // page body
            Constraint::Length(1), // help bar
        ])
        .split(area);

    AppLayout {
        title_bar: vertical[0],
        body: vertical[1],
        help_bar: vertical[2],
    }
}
