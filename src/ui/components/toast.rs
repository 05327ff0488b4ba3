//! Toast notification component.
//!
//! Draws the newest notification as a small overlay in the bottom-right
//! corner. The level decides the prefix and text color.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::store::{Notification, NotificationLevel};
use crate::theme::{ERROR_COLOR, PRIMARY_COLOR, SUCCESS_COLOR, WARNING_COLOR};

// ============================================================================
// Constants
// ============================================================================

const MIN_TOAST_WIDTH: u16 = 20;

const TOAST_HEIGHT: u16 = 3;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Vertical padding from the bottom edge.
const TOAST_PADDING_BOTTOM: u16 = 2;

/// Border and spacing added to the message length.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders `notification` in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, notification: &Notification) {
    let text = toast_text(notification);
    let toast_area = calculate_toast_position(area, &text);

    frame.render_widget(Clear, toast_area);

    let toast_block = create_toast_block();
    let inner_area = toast_block.inner(toast_area);
    frame.render_widget(toast_block, toast_area);

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(level_color(notification.level)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, inner_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn toast_text(notification: &Notification) -> String {
    format!("{} {}", level_prefix(notification.level), notification.message)
}

const fn level_prefix(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Success => "[+]",
        NotificationLevel::Info => "[i]",
        NotificationLevel::Warning => "[!]",
        NotificationLevel::Error => "[x]",
    }
}

const fn level_color(level: NotificationLevel) -> Color {
    match level {
        NotificationLevel::Success => SUCCESS_COLOR,
        NotificationLevel::Info => PRIMARY_COLOR,
        NotificationLevel::Warning => WARNING_COLOR,
        NotificationLevel::Error => ERROR_COLOR,
    }
}

fn calculate_toast_position(area: Rect, text: &str) -> Rect {
    let text_len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let toast_width = text_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(TOAST_HEIGHT + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, TOAST_HEIGHT.min(area.height))
}

fn create_toast_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black))
}

// ============================================================================
// Tests
// ============================================================================
