//! Address book mapping wallet addresses to display labels.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::WalletError;

// ============================================================================
// Resolution
// ============================================================================

/// The outcome of looking an address up in the [`ContactBook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The address belongs to a saved contact.
    Contact { label: String, address: String },
    /// No contact matched; show the address itself.
    Raw(String),
}

impl Resolved {
    /// Returns `true` if a saved contact matched.
    #[must_use]
    pub const fn is_contact(&self) -> bool {
        matches!(self, Self::Contact { .. })
    }

    /// The underlying address, whether or not a contact matched.
    #[must_use]
    pub fn address(&self) -> &str {
        match self {
            Self::Contact { address, .. } | Self::Raw(address) => address,
        }
    }
}

#[cfg(test)]
impl Resolved {
    /// Text to display: the contact label or the raw address.
    pub fn display(&self) -> &str {
        match self {
            Self::Contact { label, .. } => label,
            Self::Raw(address) => address,
        }
    }
}

// ============================================================================
// ContactBook
// ============================================================================

/// Saved contacts keyed by address.
///
/// Serialized as a flat JSON object `{ "<address>": "<label>" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactBook {
    entries: BTreeMap<String, String>,
}

impl ContactBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the label saved for `address`, if any.
    #[must_use]
    pub fn label(&self, address: &str) -> Option<&str> {
        self.entries
            .get(address)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }

    /// Resolves an address to its contact label or the raw address.
    #[must_use]
    pub fn resolve(&self, address: &str) -> Resolved {
        match self.label(address) {
            Some(label) => Resolved::Contact {
                label: label.to_string(),
                address: address.to_string(),
            },
            None => Resolved::Raw(address.to_string()),
        }
    }

    /// Saves or relabels a contact.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InvalidInput`] if the address or label is blank.
    pub fn upsert(
        &mut self,
        address: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<(), WalletError> {
        let address = address.into().trim().to_string();
        let label = label.into().trim().to_string();

        if address.is_empty() {
            return Err(WalletError::invalid_input("contact address is empty"));
        }
        if label.is_empty() {
            return Err(WalletError::invalid_input("contact name is empty"));
        }

        self.entries.insert(address, label);
        Ok(())
    }

    /// Removes the contact saved for `address`.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::NotFound`] if no contact has that address.
    pub fn remove(&mut self, address: &str) -> Result<String, WalletError> {
        self.entries
            .remove(address)
            .ok_or_else(|| WalletError::not_found("contact", address))
    }

    /// Iterates over `(address, label)` pairs in address order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(address, label)| (address.as_str(), label.as_str()))
    }

    /// Reads a contact book from a JSON file.
    ///
    /// A missing file is an empty book.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, WalletError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Writes the contact book to a JSON file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), WalletError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl<A: Into<String>, L: Into<String>> FromIterator<(A, L)> for ContactBook {
    fn from_iter<I: IntoIterator<Item = (A, L)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(address, label)| (address.into(), label.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
