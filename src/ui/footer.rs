//! Footer bar with key hints for the active input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Key hints shown for an input context.
#[must_use]
pub const fn hints(context: InputContext) -> &'static str {
    match context {
        InputContext::Main => {
            "q:Quit  r:Reload  j/k:Move  v:View  a:Add contact  c:Copy address  Esc:Dismiss"
        }
        InputContext::AddContact => "Type a name  Enter:Save  Esc:Cancel",
        InputContext::ConfirmQuit => "y:Quit  n/Esc:Stay",
    }
}

/// Renders the footer bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(hints(app.input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
