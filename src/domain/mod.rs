//! Domain types for the LazyNeo wallet history viewer.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for local wallet data
//! - [`network`] - Networks and block explorers
//! - [`amount`] - Display amounts with loose numeric coercion
//! - [`transaction`] - History records and their validated form
//! - [`contacts`] - The address book

// ============================================================================
// Module Declarations
// ============================================================================

pub mod amount;
pub mod contacts;
pub mod error;
pub mod network;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use amount::Amount;
pub use contacts::{ContactBook, Resolved};
pub use error::WalletError;
pub use network::{Explorer, Network};
pub use transaction::{
    HistoryRecord, Transaction, TxKind, decode_entry, transactions_from_records,
};
