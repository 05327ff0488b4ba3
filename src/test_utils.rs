//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use ratatui::buffer::Buffer;
use ratatui::{Terminal, backend::TestBackend};
use rstest::fixture;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::domain::transaction::TxEntry;
use crate::domain::{Amount, ContactBook, Explorer, Network, Transaction, TxKind};
use crate::state::platform::clipboard::{ClipboardError, ClipboardResult};
use crate::state::{App, AppConfig, Clipboard, ExplorerOpener};

/// Wallet address used by [`mock_app`].
pub const WALLET_ADDRESS: &str = "AWALLETxxxxxxxxxxxxxxxxxxxxxxxxxxx";

// ============================================================================
// Mother Pattern Factories
// ============================================================================

/// Raw history records as they appear in an export.
pub struct TxEntryMother;

impl TxEntryMother {
    fn base(tx_type: &str, txid: &str) -> TxEntry {
        TxEntry {
            tx_type: tx_type.to_string(),
            txid: txid.to_string(),
            time: Some(1_700_000_000),
            label: "NEO".to_string(),
            amount: Amount::new("1"),
            to: WALLET_ADDRESS.to_string(),
            from: None,
            is_network_fee: false,
        }
    }

    #[must_use]
    pub fn claim(txid: &str, to: &str) -> TxEntry {
        TxEntry {
            label: "GAS".to_string(),
            amount: Amount::new("0.25"),
            to: to.to_string(),
            ..Self::base("CLAIM", txid)
        }
    }

    #[must_use]
    pub fn send(txid: &str, to: &str, amount: &str) -> TxEntry {
        TxEntry {
            amount: Amount::new(amount),
            to: to.to_string(),
            ..Self::base("SEND", txid)
        }
    }

    #[must_use]
    pub fn network_fee(txid: &str) -> TxEntry {
        TxEntry {
            label: "GAS".to_string(),
            amount: Amount::new("0.001"),
            to: "ANETWORKFEE".to_string(),
            is_network_fee: true,
            ..Self::base("SEND", txid)
        }
    }

    #[must_use]
    pub fn receive(txid: &str, from: &str) -> TxEntry {
        TxEntry {
            from: Some(from.to_string()),
            ..Self::base("RECEIVE", txid)
        }
    }
}

/// Validated transactions.
pub struct TransactionMother;

impl TransactionMother {
    fn base(txid: &str, kind: TxKind) -> Transaction {
        Transaction {
            txid: txid.to_string(),
            time: Some(1_700_000_000),
            label: "NEO".to_string(),
            amount: Amount::new("5"),
            kind,
        }
    }

    #[must_use]
    pub fn claim(txid: &str, to: &str) -> Transaction {
        Transaction {
            label: "GAS".to_string(),
            ..Self::base(txid, TxKind::Claim { to: to.to_string() })
        }
    }

    #[must_use]
    pub fn send(txid: &str, to: &str) -> Transaction {
        Self::base(
            txid,
            TxKind::Send {
                to: to.to_string(),
                network_fee: false,
            },
        )
    }

    #[must_use]
    pub fn network_fee(txid: &str, to: &str) -> Transaction {
        Transaction {
            label: "GAS".to_string(),
            amount: Amount::new("0.001"),
            ..Self::base(
                txid,
                TxKind::Send {
                    to: to.to_string(),
                    network_fee: true,
                },
            )
        }
    }

    #[must_use]
    pub fn receive(txid: &str, from: &str) -> Transaction {
        Self::base(
            txid,
            TxKind::Receive {
                from: from.to_string(),
                to: WALLET_ADDRESS.to_string(),
            },
        )
    }
}

// ============================================================================
// Tracing Capture
// ============================================================================

/// Counts warning events emitted while running a closure.
#[derive(Debug, Clone, Default)]
pub struct TracingCapture {
    warnings: Arc<AtomicUsize>,
}

struct WarningCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarningCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl TracingCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with a subscriber that records into this capture.
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber =
            tracing_subscriber::registry().with(WarningCounter(Arc::clone(&self.warnings)));
        tracing::subscriber::with_default(subscriber, f)
    }

    /// Number of warnings seen so far.
    #[must_use]
    pub fn warnings(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Platform Fakes
// ============================================================================

/// Explorer opener that records URLs instead of launching a browser.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    pub opened: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl RecordingOpener {
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        self.opened.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl ExplorerOpener for RecordingOpener {
    fn open_tx(
        &mut self,
        network: Network,
        explorer: Explorer,
        txid: &str,
    ) -> std::io::Result<String> {
        if self.fail {
            return Err(std::io::Error::other("no browser"));
        }
        let url = explorer.transaction_url(network, txid);
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(url.clone());
        }
        Ok(url)
    }
}

/// Clipboard that records copied text.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    pub copied: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl RecordingClipboard {
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.copied.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl Clipboard for RecordingClipboard {
    fn copy_text(&mut self, text: &str) -> ClipboardResult<()> {
        if self.fail {
            return Err(ClipboardError::NotAvailable);
        }
        if let Ok(mut copied) = self.copied.lock() {
            copied.push(text.to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Flattens a buffer into text, one line per row.
#[must_use]
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut result = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        result.push('\n');
    }
    result
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).expect("terminal creation should succeed")
}

/// An app on TestNet with one contact and recording platform fakes.
#[fixture]
pub fn mock_app() -> (App, RecordingOpener, RecordingClipboard) {
    let opener = RecordingOpener::default();
    let clipboard = RecordingClipboard::default();
    let config = AppConfig {
        network: Network::TestNet,
        explorer: Explorer::NeoScan,
        address: WALLET_ADDRESS.to_string(),
        history_file: None,
    };
    let contacts: ContactBook = [("ACONTACT", "Alice")].into_iter().collect();

    let app = App::new(config, contacts).with_platform(opener.clone(), clipboard.clone());
    (app, opener, clipboard)
}

/// Loads `transactions` into `app` as if a history load had finished.
pub fn with_transactions(app: &mut App, transactions: Vec<Transaction>) {
    app.transactions = transactions;
    app.refresh_rows();
}
