//! Network and block explorer configuration.
//!
//! This module defines the supported NEO networks and the block explorers
//! that transactions can be opened in.

use serde::{Deserialize, Serialize};

// ============================================================================
// Network
// ============================================================================

/// NEO network variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[allow(clippy::enum_variant_names)]
pub enum Network {
    /// NEO MainNet - the production network.
    #[default]
    MainNet,
    /// NEO TestNet - the test network for development.
    TestNet,
}

impl Network {
    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::MainNet => "MainNet",
            Self::TestNet => "TestNet",
        }
    }

    /// Returns the wallet's network identifier (`"1"` MainNet, `"2"` TestNet).
    #[must_use]
    pub const fn id(&self) -> &str {
        match self {
            Self::MainNet => "1",
            Self::TestNet => "2",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Explorer
// ============================================================================

/// Block explorers a transaction can be opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Explorer {
    /// neoscan.io
    #[default]
    NeoScan,
    /// neotracker.io
    NeoTracker,
}

impl Explorer {
    /// Returns the human-readable name of the explorer.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::NeoScan => "NeoScan",
            Self::NeoTracker => "NeoTracker",
        }
    }

    /// Returns the explorer's base URL on the given network.
    #[must_use]
    pub const fn base_url(&self, network: Network) -> &str {
        match (self, network) {
            (Self::NeoScan, Network::MainNet) => "https://neoscan.io",
            (Self::NeoScan, Network::TestNet) => "https://neoscan-testnet.io",
            (Self::NeoTracker, Network::MainNet) => "https://neotracker.io",
            (Self::NeoTracker, Network::TestNet) => "https://testnet.neotracker.io",
        }
    }

    /// Builds the URL of a transaction page.
    ///
    /// # Arguments
    ///
    /// * `network` - The network the transaction lives on
    /// * `txid` - The transaction id
    ///
    /// # Returns
    ///
    /// The full explorer URL for the transaction.
    #[must_use]
    pub fn transaction_url(&self, network: Network, txid: &str) -> String {
        let base = self.base_url(network);
        match self {
            Self::NeoScan => format!("{base}/transaction/{txid}"),
            Self::NeoTracker => format!("{base}/tx/{txid}"),
        }
    }
}

impl std::fmt::Display for Explorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
