//! Application state for the LazyNeo TUI.
//!
//! - [`store`] - The root store and its slices (requests, wallet generation,
//!   claim, notifications, modal)
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//! - [`platform`] - Clipboard, browser, and directory access
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                         App                          │
//! ├──────────────┬──────────────┬────────────────────────┤
//! │    Store     │   history    │   platform handles     │
//! │  - requests  │  - txns      │  - ExplorerOpener      │
//! │  - modal     │  - rows      │  - Clipboard           │
//! │  - notifs    │  - contacts  │                        │
//! └──────────────┴──────────────┴────────────────────────┘
//! ```
//!
//! Rows never perform side effects. The `App` reads the selected row's
//! requests and performs them through the platform handles.

use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::domain::{ContactBook, HistoryRecord, Transaction, WalletError};
use crate::widgets::{RowContext, TransactionListState, TransactionRow};

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod history;
pub mod platform;
pub mod store;

pub use config::{AppConfig, ConfigOverrides};
pub use platform::{BrowserOpener, Clipboard, ClipboardManager, ExplorerOpener};
pub use store::Store;

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main loop.
#[derive(Debug)]
pub enum AppMessage {
    /// The history file finished loading.
    HistoryLoaded(Result<Vec<HistoryRecord>, WalletError>),
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
///
/// # Example
///
/// ```ignore
/// use crate::state::{App, AppConfig};
///
/// let app = App::new(AppConfig::load(), ContactBook::new());
/// ```
#[derive(Debug)]
pub struct App {
    /// Root store; every UI-visible change goes through it.
    pub store: Store,

    /// Current configuration.
    pub config: AppConfig,

    /// Saved contacts.
    pub contacts: ContactBook,

    /// Where contacts are persisted; `None` keeps them in memory.
    pub(crate) contacts_path: Option<PathBuf>,

    /// Transactions from the last successful history load.
    pub transactions: Vec<Transaction>,

    /// Display rows, rebuilt whenever transactions or contacts change.
    pub rows: Vec<TransactionRow>,

    /// Selection and scroll state of the history list.
    pub list: TransactionListState,

    /// How many rows fit in the list area; updated on every render.
    pub(crate) visible_rows: usize,

    /// Whether the application should exit.
    pub exit: bool,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // Sends use `let _ = tx.send(...)`: the receiver may already be gone
    // during shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Platform Handles
    // ========================================================================
    pub(crate) opener: Box<dyn ExplorerOpener>,
    pub(crate) clipboard: Box<dyn Clipboard>,
}

impl App {
    /// Creates an app using the system browser and clipboard.
    #[must_use]
    pub fn new(config: AppConfig, contacts: ContactBook) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            store: Store::new(),
            config,
            contacts,
            contacts_path: None,
            transactions: Vec::new(),
            rows: Vec::new(),
            list: TransactionListState::new(),
            visible_rows: 1,
            exit: false,
            message_tx,
            message_rx,
            opener: Box::new(BrowserOpener),
            clipboard: Box::new(ClipboardManager::new()),
        }
    }

    /// Persists contact changes to `path`.
    #[must_use]
    pub fn with_contacts_path(mut self, path: PathBuf) -> Self {
        self.contacts_path = Some(path);
        self
    }

    /// Replaces the browser and clipboard handles.
    #[cfg(test)]
    #[must_use]
    pub fn with_platform(
        mut self,
        opener: impl ExplorerOpener + 'static,
        clipboard: impl Clipboard + 'static,
    ) -> Self {
        self.opener = Box::new(opener);
        self.clipboard = Box::new(clipboard);
        self
    }

    /// The ambient context every row is built with.
    #[must_use]
    pub fn row_context(&self) -> RowContext<'_> {
        RowContext {
            network: self.config.network,
            explorer: self.config.explorer,
            contacts: &self.contacts,
            address: &self.config.address,
        }
    }

    /// Rebuilds display rows from the current transactions and contacts.
    pub fn refresh_rows(&mut self) {
        let ctx = self.row_context();
        let rows = self
            .transactions
            .iter()
            .map(|txn| TransactionRow::build(txn, &ctx))
            .collect();
        self.rows = rows;
        self.list.clamp(self.rows.len(), self.visible_rows);
    }

    /// The row under the cursor.
    #[must_use]
    pub fn selected_row(&self) -> Option<&TransactionRow> {
        self.list.selected().and_then(|i| self.rows.get(i))
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Main loop, key and tick handling
mod app_lifecycle;

// Background history loading
mod app_messages;

// Command execution
mod app_commands;

// ============================================================================
// Tests
// ============================================================================
