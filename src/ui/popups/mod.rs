//! Modal popups drawn over the history list.
//!
//! Popups render on top of the main UI; key input goes to the open popup
//! until it is dismissed.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};

pub mod add_contact;
pub mod confirm;

pub use add_contact::render as render_add_contact;
pub use confirm::render as render_confirm_quit;

/// Builds a help line like `y:Yes  n/Esc:No` with the keys highlighted.
#[must_use]
pub fn help_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(PRIMARY_COLOR)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(MUTED_COLOR);

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, label)) in hints.iter().enumerate() {
        let sep = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(":{label}{sep}"), text_style));
    }
    Line::from(spans)
}
