//! Wallet transaction history records.
//!
//! History arrives as [`TxEntry`] records, a flat wire format whose `type`
//! tag decides which address fields matter. Converting to [`Transaction`]
//! moves that tag into [`TxKind`], so each kind carries exactly the fields it
//! uses and malformed records are rejected at the boundary.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::error::EntryError;

// ============================================================================
// Constants
// ============================================================================

/// Counterparty recorded for newly issued tokens.
pub const MINT_SENTINEL: &str = "MINT TOKENS";

/// Wire tag for claim records.
pub const TX_TYPE_CLAIM: &str = "CLAIM";
/// Wire tag for send records.
pub const TX_TYPE_SEND: &str = "SEND";
/// Wire tag for receive records.
pub const TX_TYPE_RECEIVE: &str = "RECEIVE";

/// Date format used in history rows.
pub const TX_DATE_FORMAT: &str = "%m/%d/%Y | %H:%M:%S";

// ============================================================================
// Wire Format
// ============================================================================

/// A history record as exported by the wallet backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxEntry {
    #[serde(rename = "type")]
    pub tx_type: String,
    #[serde(default)]
    pub txid: String,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub amount: Amount,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub is_network_fee: bool,
}

// ============================================================================
// Domain Types
// ============================================================================

/// The kind of a history record with the addresses that kind displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxKind {
    /// GAS claimed to `to`.
    Claim { to: String },
    /// Funds sent to `to`; `network_fee` rows pay the network, not a person.
    Send { to: String, network_fee: bool },
    /// Funds received from `from`.
    Receive { from: String, to: String },
}

impl TxKind {
    /// Returns the wire tag for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Claim { .. } => TX_TYPE_CLAIM,
            Self::Send { .. } => TX_TYPE_SEND,
            Self::Receive { .. } => TX_TYPE_RECEIVE,
        }
    }
}

/// A validated history record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub txid: String,
    /// Unix seconds, if the backend reported a time.
    pub time: Option<i64>,
    pub label: String,
    pub amount: Amount,
    pub kind: TxKind,
}

impl Transaction {
    /// Returns `true` when this is a receive from the mint sentinel.
    #[must_use]
    pub fn is_mint(&self) -> bool {
        matches!(&self.kind, TxKind::Receive { from, .. } if from == MINT_SENTINEL)
    }

    /// Returns `true` when `address` received its own funds back with no
    /// net amount (fee reclamation).
    ///
    /// # Arguments
    ///
    /// * `address` - The wallet address whose history is shown
    #[must_use]
    pub fn is_gas_claim(&self, address: &str) -> bool {
        matches!(&self.kind, TxKind::Receive { from, .. } if from == address)
            && self.amount.is_falsy()
    }

    /// Formats the record's time in the local timezone.
    ///
    /// # Returns
    ///
    /// `None` when the time is absent or zero.
    #[must_use]
    pub fn formatted_time(&self) -> Option<String> {
        format_tx_date(self.time, &Local)
    }
}

impl TryFrom<TxEntry> for Transaction {
    type Error = EntryError;

    fn try_from(entry: TxEntry) -> Result<Self, Self::Error> {
        if entry.txid.trim().is_empty() {
            return Err(EntryError::MissingTxid {
                kind: entry.tx_type,
            });
        }

        let kind = match entry.tx_type.as_str() {
            TX_TYPE_CLAIM => TxKind::Claim { to: entry.to },
            TX_TYPE_SEND => TxKind::Send {
                to: entry.to,
                network_fee: entry.is_network_fee,
            },
            TX_TYPE_RECEIVE => match entry.from {
                Some(from) if !from.is_empty() => TxKind::Receive { from, to: entry.to },
                _ => return Err(EntryError::MissingSender { txid: entry.txid }),
            },
            _ => {
                return Err(EntryError::UnsupportedType {
                    kind: entry.tx_type,
                    txid: entry.txid,
                });
            }
        };

        Ok(Self {
            txid: entry.txid,
            time: entry.time,
            label: entry.label,
            amount: entry.amount,
            kind,
        })
    }
}

// ============================================================================
// History Conversion
// ============================================================================

/// One element of a history export: a decoded record, or the reason it
/// could not be decoded.
pub type HistoryRecord = Result<TxEntry, EntryError>;

/// Decodes the element at `index` of a history export.
///
/// # Errors
///
/// Returns [`EntryError::Malformed`] when the element is not a history
/// record (missing `type`, wrong field types, `null` amounts).
pub fn decode_entry(index: usize, value: serde_json::Value) -> HistoryRecord {
    serde_json::from_value(value).map_err(|err| EntryError::Malformed {
        index,
        message: err.to_string(),
    })
}

/// Converts one history record, logging why it was dropped if it cannot be
/// shown.
///
/// Every rejection logs exactly one warning, except a receive without a
/// sender, which is dropped quietly at debug level.
#[must_use]
pub fn accept_record(record: HistoryRecord) -> Option<Transaction> {
    match record.and_then(Transaction::try_from) {
        Ok(txn) => Some(txn),
        Err(err @ EntryError::MissingSender { .. }) => {
            tracing::debug!("Skipping history record: {err}");
            None
        }
        Err(err) => {
            tracing::warn!("Skipping history record: {err}");
            None
        }
    }
}

/// Converts history records, dropping the ones that cannot be shown.
#[must_use]
pub fn transactions_from_records(records: Vec<HistoryRecord>) -> Vec<Transaction> {
    records.into_iter().filter_map(accept_record).collect()
}

/// Formats unix seconds as `MM/DD/YYYY | HH:mm:ss` in the given timezone.
///
/// # Returns
///
/// `None` for an absent or zero time, or one outside chrono's range.
#[must_use]
pub fn format_tx_date<Tz>(time: Option<i64>, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let secs = time.filter(|&t| t != 0)?;
    let utc = DateTime::from_timestamp(secs, 0)?;
    Some(utc.with_timezone(tz).format(TX_DATE_FORMAT).to_string())
}

// ============================================================================
// Tests
// ============================================================================
