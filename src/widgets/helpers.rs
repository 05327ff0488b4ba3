//! Helper functions for formatting wallet data in widgets.
//!
//! - Address truncation
//! - Fixed-width column padding
//! - Transaction kind icons and colors

use ratatui::style::Color;

use crate::constants::{CLAIM_ICON, RECEIVE_ICON, SEND_ICON};
use crate::domain::TxKind;
use crate::theme::{ERROR_COLOR, SUCCESS_COLOR, WARNING_COLOR};

// ============================================================================
// Address Formatting
// ============================================================================

/// Truncate an address to fit in the given width.
///
/// If the address is longer than `max_len`, it will be truncated with an ellipsis
/// in the middle (e.g., "AK2n...Rp8y").
///
/// # Arguments
///
/// * `addr` - The address to truncate
/// * `max_len` - The maximum length of the resulting string
///
/// # Returns
///
/// A truncated address string or the original if it fits
#[must_use]
pub fn truncate_address(addr: &str, max_len: usize) -> String {
    let len = addr.chars().count();
    if len <= max_len {
        return addr.to_string();
    }

    if max_len < 7 {
        return addr.chars().take(max_len).collect();
    }

    // Reserve 3 chars for "..."
    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = addr.chars().take(prefix_len).collect();
    let suffix: String = addr.chars().skip(len - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

// ============================================================================
// Column Padding
// ============================================================================

/// Pads or cuts `text` to exactly `width` characters, left-aligned.
#[must_use]
pub fn fit_left(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}

/// Pads or cuts `text` to exactly `width` characters, right-aligned.
#[must_use]
pub fn fit_right(text: &str, width: usize) -> String {
    let cut: String = text.chars().take(width).collect();
    let len = cut.chars().count();
    format!("{}{cut}", " ".repeat(width - len))
}

// ============================================================================
// Transaction Kind Helpers
// ============================================================================

/// Icon for a transaction kind.
#[must_use]
pub const fn kind_icon(kind: &TxKind) -> &'static str {
    match kind {
        TxKind::Claim { .. } => CLAIM_ICON,
        TxKind::Send { .. } => SEND_ICON,
        TxKind::Receive { .. } => RECEIVE_ICON,
    }
}

/// Accent color for a transaction kind.
#[must_use]
pub const fn kind_color(kind: &TxKind) -> Color {
    match kind {
        TxKind::Claim { .. } => WARNING_COLOR,
        TxKind::Send { .. } => ERROR_COLOR,
        TxKind::Receive { .. } => SUCCESS_COLOR,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_address() {
        let long_addr = "AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y";
        let cases = [
            // (input, max_len, expected)
            ("ABCDEFGH", 20, "ABCDEFGH"),
            ("ABCDEFGHIJ", 10, "ABCDEFGHIJ"),
            (long_addr, 13, "AK2nJ...zRp8y"),
            ("ABCDEFGHIJ", 5, "ABCDE"),
        ];

        for (addr, max_len, expected) in cases {
            let result = truncate_address(addr, max_len);
            assert!(result.chars().count() <= max_len, "{addr}: too long");
            assert_eq!(result, expected, "{addr} at {max_len}");
        }
    }

    #[test]
    fn test_fit_columns() {
        assert_eq!(fit_left("NEO", 5), "NEO  ");
        assert_eq!(fit_left("NEOGAS", 3), "NEO");
        assert_eq!(fit_right("12", 5), "   12");
        assert_eq!(fit_right("123456", 4), "1234");
    }

    #[test]
    fn test_kind_icons_are_distinct() {
        let claim = TxKind::Claim { to: String::new() };
        let send = TxKind::Send {
            to: String::new(),
            network_fee: false,
        };
        let receive = TxKind::Receive {
            from: String::new(),
            to: String::new(),
        };

        assert_eq!(kind_icon(&claim), CLAIM_ICON);
        assert_eq!(kind_icon(&send), SEND_ICON);
        assert_eq!(kind_icon(&receive), RECEIVE_ICON);
        assert_ne!(kind_color(&send), kind_color(&receive));
    }
}
