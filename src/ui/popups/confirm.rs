//! Quit confirmation popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
};

use super::help_line;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 50;
const POPUP_HEIGHT: u16 = 7;

/// Renders the quit confirmation popup centered in `area`.
pub fn render(frame: &mut Frame, area: Rect) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    if popup_area.height < 5 {
        return;
    }

    let popup_block = create_popup_block("Confirm Quit");
    let inner_area = popup_block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block, popup_area);

    let message_area = Rect::new(inner_area.x, inner_area.y + 1, inner_area.width, 1);
    frame.render_widget(
        Paragraph::new("Are you sure you want to close lazyneo?").alignment(Alignment::Center),
        message_area,
    );

    let separator_area = Rect::new(
        inner_area.x,
        popup_area.bottom().saturating_sub(3),
        inner_area.width,
        1,
    );
    frame.render_widget(
        Paragraph::new("─".repeat(usize::from(inner_area.width)))
            .style(Style::default().fg(Color::DarkGray)),
        separator_area,
    );

    let help_area = Rect::new(
        inner_area.x,
        popup_area.bottom().saturating_sub(2),
        inner_area.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(help_line(&[("y", "Yes"), ("n/Esc", "No")])).alignment(Alignment::Center),
        help_area,
    );
}

// ============================================================================
// Tests
// ============================================================================
