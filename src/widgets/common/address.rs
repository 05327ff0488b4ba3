//! Counterparty address display.
//!
//! Renders a resolved address: a saved contact's label in the accent color,
//! or the raw address truncated to fit, optionally followed by a copy marker.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::constants::{ADDRESS_DISPLAY_LEN, COPY_SYMBOL};
use crate::domain::Resolved;
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, PRIMARY_COLOR};
use crate::widgets::helpers::{fit_left, truncate_address};

// ============================================================================
// AddressDisplay
// ============================================================================

/// Renders a [`Resolved`] address as a fixed-width column.
///
/// # Example
///
/// ```text
/// Alice                               (contact)
/// AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y ⧉ (raw, copyable)
/// ```
#[derive(Debug, Clone)]
pub struct AddressDisplay<'a> {
    resolved: &'a Resolved,
    copyable: bool,
}

impl<'a> AddressDisplay<'a> {
    /// Create a new address display.
    #[must_use]
    pub const fn new(resolved: &'a Resolved) -> Self {
        Self {
            resolved,
            copyable: false,
        }
    }

    /// Show the copy marker after the address.
    #[must_use]
    pub const fn copyable(mut self, copyable: bool) -> Self {
        self.copyable = copyable;
        self
    }

    /// Generate the display spans: the address column and the copy marker
    /// column (blank when not copyable).
    #[must_use]
    pub fn to_spans(&self) -> Vec<Span<'static>> {
        let (text, style) = match self.resolved {
            Resolved::Contact { label, .. } => (
                fit_left(label, ADDRESS_DISPLAY_LEN),
                Style::default()
                    .fg(ACCENT_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Resolved::Raw(address) => (
                fit_left(
                    &truncate_address(address, ADDRESS_DISPLAY_LEN),
                    ADDRESS_DISPLAY_LEN,
                ),
                Style::default().fg(PRIMARY_COLOR),
            ),
        };

        let marker = if self.copyable {
            Span::styled(format!(" {COPY_SYMBOL}"), Style::default().fg(MUTED_COLOR))
        } else {
            Span::raw("  ")
        };

        vec![Span::styled(text, style), marker]
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn content(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_address_display_behavior() {
        struct TestCase {
            name: &'static str,
            resolved: Resolved,
            copyable: bool,
            expect_content: String,
        }

        let test_cases = [
            TestCase {
                name: "raw address with copy marker",
                resolved: Resolved::Raw("AXYZ".to_string()),
                copyable: true,
                expect_content: format!("{:<34} ⧉", "AXYZ"),
            },
            TestCase {
                name: "contact label without marker",
                resolved: Resolved::Contact {
                    label: "Alice".to_string(),
                    address: "AXYZ".to_string(),
                },
                copyable: false,
                expect_content: format!("{:<34}  ", "Alice"),
            },
            TestCase {
                name: "long raw address is truncated",
                resolved: Resolved::Raw("0123456789012345678901234567890123456789".to_string()),
                copyable: false,
                expect_content: "0123456789012345...567890123456789  ".to_string(),
            },
        ];

        for tc in test_cases {
            let spans = AddressDisplay::new(&tc.resolved)
                .copyable(tc.copyable)
                .to_spans();

            assert_eq!(spans.len(), 2, "{}: span count", tc.name);
            assert_eq!(content(&spans), tc.expect_content, "{}", tc.name);
        }
    }

    #[test]
    fn test_contact_uses_accent_color() {
        let resolved = Resolved::Contact {
            label: "Alice".to_string(),
            address: "AXYZ".to_string(),
        };
        let spans = AddressDisplay::new(&resolved).to_spans();
        assert_eq!(spans[0].style.fg, Some(ACCENT_COLOR));
    }
}
