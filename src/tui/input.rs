// Keyboard input handling.
//
// Translates crossterm key events into ViewState mutations. Returns true
// when the viewer should quit.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{Page, ViewState};
use crate::site::SiteData;

/// Handle a keyboard event. Returns `true` when the key ends the session.
pub fn handle_key(key_event: KeyEvent, state: &mut ViewState, data: &SiteData) -> bool {
    // Only process key press events. On Windows, crossterm emits both Press
    // and Release events for each physical keypress; ignoring non-Press
    // events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    // Ctrl+C always quits immediately regardless of mode (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return true;
    }

    if state.filter_mode {
        handle_filter_mode(key_event, state);
        return false;
    }

    match key_event.code {
        KeyCode::Char('q') => return true,

        // Navigation shared by every page
        KeyCode::Char('j') | KeyCode::Down => state.select_next(),
        KeyCode::Char('k') | KeyCode::Up => state.select_prev(),

        // Page switching
        KeyCode::Char('l') => state.page = Page::Leaderboard,
        KeyCode::Char('b') | KeyCode::Esc => {
            if state.page != Page::Summary {
                state.page = Page::Summary;
            }
        }
        KeyCode::Enter => {
            if state.page == Page::Summary {
                state.open_selected(data);
            }
        }

        // Summary table controls
        KeyCode::Char('s') => {
            if state.page == Page::Summary {
                state.cycle_sort();
            }
        }
        KeyCode::Char('S') => {
            if state.page == Page::Summary {
                state.flip_sort();
            }
        }
        KeyCode::Char('/') => {
            if state.page == Page::Summary {
                state.filter_mode = true;
            }
        }

        _ => {}
    }

    false
}

/// Filter mode: capture printable characters into the filter text.
fn handle_filter_mode(key_event: KeyEvent, state: &mut ViewState) {
    match key_event.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.filter_mode = false;
        }
        KeyCode::Backspace => {
            state.filter_text.pop();
            state.selected = 0;
        }
        KeyCode::Char(c) => {
            state.filter_text.push(c);
            state.selected = 0;
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
