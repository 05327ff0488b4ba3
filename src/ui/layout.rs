//! Layout calculations for the LazyNeo TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};

// ============================================================================
// Layout Structs
// ============================================================================

/// Top-level screen areas.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Logo and wallet summary.
    pub header: Rect,
    /// Transaction history.
    pub main: Rect,
    /// Key hints.
    pub footer: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Splits the screen into header, history, and footer.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Calculate a centered popup area within a parent area.
///
/// The popup keeps a two-cell margin on every side of the parent.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
