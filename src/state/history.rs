//! Reading wallet history exports.
//!
//! A history file is a JSON array of [`TxEntry`] records. Elements are
//! decoded one at a time, so a single bad element costs one row rather than
//! the whole file.
//!
//! [`TxEntry`]: crate::domain::transaction::TxEntry

use std::path::Path;

use crate::domain::{HistoryRecord, WalletError, decode_entry};

/// Parses a history export into one record per array element.
///
/// # Errors
///
/// Returns [`WalletError::Parse`] when the content is not a JSON array.
pub fn parse_history(content: &str) -> Result<Vec<HistoryRecord>, WalletError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(content)?;
    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| decode_entry(index, value))
        .collect())
}

/// Reads and parses the history export at `path`.
///
/// # Errors
///
/// Returns [`WalletError::NotFound`] when the file does not exist, an I/O
/// error when it cannot be read, or a parse error.
pub async fn load_history(path: &Path) -> Result<Vec<HistoryRecord>, WalletError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(WalletError::not_found(
                "history file",
                path.display().to_string(),
            ));
        }
        Err(err) => return Err(err.into()),
    };
    let records = parse_history(&content)?;
    tracing::debug!(count = records.len(), path = %path.display(), "history loaded");
    Ok(records)
}
