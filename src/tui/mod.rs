// Terminal viewer: three pages mirroring the site routes.
//
// The viewer owns a `ViewState` built once from the immutable data snapshot.
// There is no background feed, so the event loop is a plain blocking
// poll/read loop; rendering happens after every input and on a idle tick.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{self, Event};
use tracing::info;

use crate::config::SiteConfig;
use crate::site::detail::{build_detail, PlayerDetail};
use crate::site::leaderboard::{default_sections, LeaderboardSection};
use crate::site::summary::{
    build_summary, filter_summary, sort_summary, SummaryColumn, SummaryRow,
};
use crate::site::SiteData;

// ---------------------------------------------------------------------------
// Pages / ViewState
// ---------------------------------------------------------------------------

/// Which page is on screen. One variant per site route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Summary,
    Detail,
    Leaderboard,
}

/// All state the renderer reads. Built once from `SiteData`; input handling
/// mutates only the view-local parts (page, sort, filter, selection).
pub struct ViewState {
    pub page: Page,
    /// Summary rows in the current sort order.
    pub rows: Vec<SummaryRow>,
    /// Active sort column; `None` keeps roster order.
    pub sort_column: Option<SummaryColumn>,
    pub sort_descending: bool,
    pub filter_text: String,
    pub filter_mode: bool,
    /// Selected index into the filtered row list.
    pub selected: usize,
    pub detail: Option<PlayerDetail>,
    pub leaderboard: Vec<LeaderboardSection>,
}

impl ViewState {
    pub fn new(data: &SiteData, site: &SiteConfig) -> Self {
        ViewState {
            page: Page::Summary,
            rows: build_summary(data),
            sort_column: None,
            sort_descending: false,
            filter_text: String::new(),
            filter_mode: false,
            selected: 0,
            detail: None,
            leaderboard: default_sections(&data.players, site.leaderboard_size),
        }
    }

    /// Rows visible under the current filter.
    pub fn visible(&self) -> Vec<&SummaryRow> {
        filter_summary(&self.rows, &self.filter_text)
    }

    /// Selection clamped to the visible rows.
    pub fn clamped_selection(&self) -> Option<usize> {
        let len = self.visible().len();
        if len == 0 {
            None
        } else {
            Some(self.selected.min(len - 1))
        }
    }

    pub fn select_next(&mut self) {
        if let Some(sel) = self.clamped_selection() {
            let len = self.visible().len();
            self.selected = (sel + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(sel) = self.clamped_selection() {
            self.selected = sel.saturating_sub(1);
        }
    }

    /// Advance the sort column through the column cycle and re-sort. The
    /// direction resets to the column's natural one (ERA and WHIP ascend).
    pub fn cycle_sort(&mut self) {
        let next = match self.sort_column {
            None => Some(SummaryColumn::ALL[0]),
            Some(current) => {
                let idx = SummaryColumn::ALL
                    .iter()
                    .position(|c| *c == current)
                    .unwrap_or(0);
                if idx + 1 < SummaryColumn::ALL.len() {
                    Some(SummaryColumn::ALL[idx + 1])
                } else {
                    None
                }
            }
        };
        self.sort_column = next;
        if let Some(column) = next {
            self.sort_descending = !column.ascending_by_default();
        }
        self.apply_sort();
    }

    /// Flip the sort direction for the active column.
    pub fn flip_sort(&mut self) {
        if self.sort_column.is_some() {
            self.sort_descending = !self.sort_descending;
            self.apply_sort();
        }
    }

    fn apply_sort(&mut self) {
        if let Some(column) = self.sort_column {
            sort_summary(&mut self.rows, column, self.sort_descending);
        }
        self.selected = 0;
    }

    /// Open the detail page for the selected summary row.
    pub fn open_selected(&mut self, data: &SiteData) {
        let Some(sel) = self.clamped_selection() else {
            return;
        };
        let name = self.visible()[sel].name.clone();
        self.detail = Some(build_detail(data, &name));
        self.page = Page::Detail;
    }
}

// ---------------------------------------------------------------------------
// Main loop
// ---------------------------------------------------------------------------

/// Run the viewer until the user quits.
///
/// Initializes the terminal, installs a panic hook to restore it on crash,
/// and drives the blocking poll/read/render loop.
pub fn run(data: &SiteData, site: &SiteConfig) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut state = ViewState::new(data, site);
    info!(
        "Viewer started: {} summary rows, {} leaderboard sections",
        state.rows.len(),
        state.leaderboard.len()
    );

    loop {
        terminal.draw(|frame| widgets::render_frame(frame, &state))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key_event) = event::read()? {
                if input::handle_key(key_event, &mut state, data) {
                    break;
                }
            }
        }
    }

    ratatui::restore();
    info!("Viewer shut down cleanly");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
