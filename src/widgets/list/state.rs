//! State management for the history list.
//!
//! Tracks the selected row and scroll position so selection survives renders
//! and history reloads.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::scrollbar,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

// ============================================================================
// TransactionListState
// ============================================================================

/// State for the transaction list widget.
///
/// # Example
///
/// ```ignore
/// use crate::widgets::list::TransactionListState;
///
/// let mut state = TransactionListState::new();
/// state.select_next(10, 4); // 10 rows, 4 visible
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransactionListState {
    /// Currently selected row index.
    pub selected_index: Option<usize>,
    /// Index of the first row in the viewport.
    pub first_visible: usize,
}

impl TransactionListState {
    /// Creates a new `TransactionListState` with no selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected_index: None,
            first_visible: 0,
        }
    }

    #[cfg(test)]
    pub const fn with_selection(index: usize) -> Self {
        Self {
            selected_index: Some(index),
            first_visible: 0,
        }
    }

    /// Returns the currently selected index.
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Moves the selection one row down, scrolling when it leaves the viewport.
    ///
    /// # Arguments
    ///
    /// * `len` - Number of rows in the list
    /// * `visible` - Number of rows that fit in the viewport
    pub fn select_next(&mut self, len: usize, visible: usize) {
        if len == 0 {
            return;
        }
        let next = match self.selected_index {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.selected_index = Some(next);
        self.scroll_to(next, visible);
    }

    /// Moves the selection one row up, scrolling when it leaves the viewport.
    pub fn select_previous(&mut self, len: usize, visible: usize) {
        if len == 0 {
            return;
        }
        let prev = self.selected_index.map_or(0, |i| i.saturating_sub(1));
        self.selected_index = Some(prev);
        self.scroll_to(prev, visible);
    }

    /// Keeps the selection inside a list that now has `len` rows.
    pub fn clamp(&mut self, len: usize, visible: usize) {
        match self.selected_index {
            _ if len == 0 => *self = Self::new(),
            Some(i) if i >= len => {
                self.selected_index = Some(len - 1);
                self.scroll_to(len - 1, visible);
            }
            None => {
                self.selected_index = Some(0);
                self.first_visible = 0;
            }
            Some(_) => {}
        }
    }

    fn scroll_to(&mut self, index: usize, visible: usize) {
        let visible = visible.max(1);
        if index < self.first_visible {
            self.first_visible = index;
        } else if index >= self.first_visible + visible {
            self.first_visible = index + 1 - visible;
        }
    }
}

// ============================================================================
// Scrollbar Helper
// ============================================================================

/// Renders a vertical scrollbar on the right side of `area`.
///
/// # Arguments
///
/// * `area` - The area to render the scrollbar in
/// * `buf` - The buffer to render to
/// * `total_items` - Total number of items in the list
/// * `item_height` - Height of each item in rows
/// * `items_per_page` - Number of items visible per page
/// * `scroll_position` - Current scroll position in terminal rows
pub fn render_list_scrollbar(
    area: Rect,
    buf: &mut Buffer,
    total_items: usize,
    item_height: usize,
    items_per_page: usize,
    scroll_position: usize,
) {
    if total_items <= items_per_page {
        return;
    }

    let scrollbar = Scrollbar::default()
        .orientation(ScrollbarOrientation::VerticalRight)
        .symbols(scrollbar::VERTICAL)
        .track_symbol(None)
        .begin_symbol(None)
        .end_symbol(None)
        .style(Style::default().fg(Color::Gray))
        .track_style(Style::default().fg(Color::DarkGray));

    let mut scrollbar_state = ScrollbarState::default()
        .content_length(total_items * item_height)
        .viewport_content_length(items_per_page * item_height)
        .position(scroll_position);

    scrollbar.render(area, buf, &mut scrollbar_state);
}

// ============================================================================
// Tests
// ============================================================================
