//! Display amounts attached to history records.
//!
//! History exports carry amounts either as JSON strings (`"12.5"`) or as
//! numbers (`12.5`). The row renderer shows them verbatim, so [`Amount`] keeps
//! the original text and only derives a numeric value when a rule needs one.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An amount exactly as it appeared in the history record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Amount(String);

impl Amount {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The amount's display text, unmodified.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Loose numeric coercion of the display text.
    ///
    /// Blank text is `0`, decimal and `0x`/`0o`/`0b` literals parse to their
    /// value, `Infinity` forms parse to infinity, and anything else is NaN.
    #[must_use]
    pub fn numeric_value(&self) -> f64 {
        let text = self.0.trim();
        if text.is_empty() {
            return 0.0;
        }

        match text {
            "Infinity" | "+Infinity" => return f64::INFINITY,
            "-Infinity" => return f64::NEG_INFINITY,
            _ => {}
        }

        for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
            if let Some(digits) = text.strip_prefix(prefix) {
                return u64::from_str_radix(digits, radix)
                    .map(|value| value as f64)
                    .unwrap_or(f64::NAN);
            }
        }

        // Rust accepts "inf" and "nan" spellings that are not numbers here.
        if text
            .chars()
            .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
        {
            return f64::NAN;
        }

        text.parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Returns `true` when the numeric value is zero or not a number.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        let value = self.numeric_value();
        value == 0.0 || value.is_nan()
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Amount {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawAmount::deserialize(deserializer)? {
            RawAmount::Text(text) => Self(text),
            RawAmount::Number(number) => Self(number.to_string()),
        })
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
