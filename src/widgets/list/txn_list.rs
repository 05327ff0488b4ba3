//! Transaction history list widget.
//!
//! Stacks [`TransactionRowWidget`]s with selection and scrolling support.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{StatefulWidget, Widget},
};

use crate::constants::TXN_ROW_HEIGHT;
use crate::theme::MUTED_COLOR;
use crate::widgets::txn_row::{TransactionRow, TransactionRowWidget};

use super::state::{TransactionListState, render_list_scrollbar};

// ============================================================================
// TransactionListWidget
// ============================================================================

/// A widget that displays history rows with selection and scrolling.
///
/// # Example
///
/// ```text
/// ┌─ History ──────────────────────────────────────────────┐
/// │ ▶ [>] 11/14/2023 | 22:13:20  NEO                     5 │
/// │     Alice                               [a] Add  [v] V │
/// │     ↳ AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y               │
/// │   [<] 11/13/2023 | 09:01:44  GAS                  0.25 │
/// │     AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y ⧉ [a] Add  [v] V │
/// │                                                        │
/// └────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug)]
pub struct TransactionListWidget<'a> {
    rows: &'a [TransactionRow],
    focused: bool,
    empty_message: &'a str,
    row_style: Style,
}

impl<'a> TransactionListWidget<'a> {
    /// Creates a new list over `rows`.
    #[must_use]
    pub const fn new(rows: &'a [TransactionRow]) -> Self {
        Self {
            rows,
            focused: false,
            empty_message: "No transactions available",
            row_style: Style::new(),
        }
    }

    /// Sets whether this widget is focused.
    ///
    /// When focused, the scrollbar is rendered if content exceeds the viewport.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Sets the text shown when there are no rows.
    #[must_use]
    pub const fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    /// Base style every row is drawn with.
    #[must_use]
    pub const fn row_style(mut self, style: Style) -> Self {
        self.row_style = style;
        self
    }

    /// Number of rows that fit in an area of the given height.
    #[must_use]
    pub const fn visible_rows(height: u16) -> usize {
        (height / TXN_ROW_HEIGHT) as usize
    }
}

impl StatefulWidget for TransactionListWidget<'_> {
    type State = TransactionListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.rows.is_empty() {
            let width = self.empty_message.chars().count() as u16;
            let x = area.x + area.width.saturating_sub(width) / 2;
            let y = area.y + area.height / 2;

            if y < area.y + area.height && x < area.x + area.width {
                buf.set_string(x, y, self.empty_message, Style::default().fg(MUTED_COLOR));
            }
            return;
        }

        let items_per_page = Self::visible_rows(area.height);
        let start = state.first_visible.min(self.rows.len().saturating_sub(1));
        let end = (start + items_per_page).min(self.rows.len());

        for (slot, index) in (start..end).enumerate() {
            let row_area = Rect::new(
                area.x,
                area.y + slot as u16 * TXN_ROW_HEIGHT,
                area.width,
                TXN_ROW_HEIGHT,
            );
            TransactionRowWidget::new(&self.rows[index])
                .style(self.row_style)
                .selected(state.selected_index == Some(index))
                .render(row_area, buf);
        }

        if self.focused {
            render_list_scrollbar(
                area,
                buf,
                self.rows.len(),
                TXN_ROW_HEIGHT as usize,
                items_per_page,
                state.first_visible * TXN_ROW_HEIGHT as usize,
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
