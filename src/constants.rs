//! Application constants for the LazyNeo TUI.
//!
//! Centralized UI dimensions, timing values, and display symbols.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// Interval between UI ticks; notifications age once per tick.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// How many ticks a notification stays visible (about two seconds).
pub const NOTIFICATION_TICKS: u16 = 20;

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of each transaction row in the history list (in rows).
///
/// Each row displays:
/// - Line 1: Icon, date, label and amount
/// - Line 2: Counterparty and actions
/// - Line 3: Empty spacer (or the contact's raw address when selected)
pub const TXN_ROW_HEIGHT: u16 = 3;

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the key hint footer (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Maximum displayed length of a counterparty address before truncation.
pub const ADDRESS_DISPLAY_LEN: usize = 34;

// ============================================================================
// Display Symbols
// ============================================================================

// Row icons are ASCII so columns line up in every terminal.

/// Icon shown on claim rows.
pub const CLAIM_ICON: &str = "[C]";

/// Icon shown on send rows.
pub const SEND_ICON: &str = "[>]";

/// Icon shown on receive rows.
pub const RECEIVE_ICON: &str = "[<]";

/// Marker shown next to a copyable address.
pub const COPY_SYMBOL: &str = "⧉";

/// Selection indicator for the focused row.
pub const SELECTED_SYMBOL: &str = "▶";

/// Indicator for unfocused rows.
pub const UNSELECTED_SYMBOL: &str = " ";
