//! Opening transactions in a block explorer.

use crate::domain::{Explorer, Network};

/// Opens a transaction page in some block explorer.
pub trait ExplorerOpener: std::fmt::Debug + Send {
    /// Opens `txid` on `explorer` for `network`.
    ///
    /// # Returns
    ///
    /// The URL that was opened.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL could not be handed to a browser.
    fn open_tx(&mut self, network: Network, explorer: Explorer, txid: &str)
    -> std::io::Result<String>;
}

/// Opens explorer links in the system's default browser.
#[derive(Debug, Default)]
pub struct BrowserOpener;

impl ExplorerOpener for BrowserOpener {
    fn open_tx(
        &mut self,
        network: Network,
        explorer: Explorer,
        txid: &str,
    ) -> std::io::Result<String> {
        let url = explorer.transaction_url(network, txid);
        tracing::debug!("Opening {url}");
        open::that(&url)?;
        Ok(url)
    }
}
