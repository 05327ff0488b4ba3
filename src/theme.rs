//! Theme and styling constants for the LazyNeo TUI.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success indicator color; receive rows.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color; claim rows.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color; send rows.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Accent color for contact labels.
pub const ACCENT_COLOR: Color = Color::Magenta;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the selected row.
pub const SELECTED_STYLE: Style = Style::new().bg(Color::DarkGray);

/// Style for an enabled action button.
pub const BUTTON_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for a disabled action button.
pub const DISABLED_BUTTON_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::DIM);

/// Base style for content behind an open modal.
pub const BACKDROP_STYLE: Style = Style::new().add_modifier(Modifier::DIM);
