//! Platform-specific abstractions.
//!
//! - [`clipboard`] - Cross-platform clipboard access
//! - [`browser`] - Opening explorer links
//! - [`paths`] - Configuration and data directory paths

pub mod browser;
pub mod clipboard;
pub mod paths;

pub use browser::{BrowserOpener, ExplorerOpener};
pub use clipboard::{Clipboard, ClipboardManager};
pub use paths::AppPaths;
