//! Cross-platform clipboard access.
//!
//! # Platform-Specific Behavior
//!
//! On Linux, external tools are tried in order:
//! 1. `wl-copy` (Wayland)
//! 2. `xclip` (X11)
//! 3. `xsel` (X11 alternative)
//! 4. Falls back to the `arboard` crate
//!
//! External tools keep the clipboard content alive after the application
//! exits. macOS and Windows use `arboard` directly.

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard not available")]
    NotAvailable,
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

// ============================================================================
// Clipboard Trait
// ============================================================================

/// Anything that can receive copied text.
pub trait Clipboard: std::fmt::Debug + Send {
    /// Copies `text`, replacing the current clipboard content.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard backend accepted the text.
    fn copy_text(&mut self, text: &str) -> ClipboardResult<()>;
}

// ============================================================================
// Clipboard Manager
// ============================================================================

/// System clipboard for Linux (X11/Wayland), macOS, and Windows.
///
/// On Linux external tools are preferred over `arboard`.
#[derive(Debug, Default)]
pub struct ClipboardManager;

impl ClipboardManager {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> ClipboardResult<()> {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];

        if TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
        {
            Ok(())
        } else {
            Err(ClipboardError::NotAvailable)
        }
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };

        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }

        drop(stdin);

        child.wait().map(|s| s.success()).unwrap_or(false)
    }
}

impl Clipboard for ClipboardManager {
    fn copy_text(&mut self, text: &str) -> ClipboardResult<()> {
        #[cfg(target_os = "linux")]
        if Self::copy_with_external_tool(text).is_ok() {
            return Ok(());
        }

        Self::copy_with_arboard(text)
    }
}

// ============================================================================
// Tests
// ============================================================================
