//! Decoding helpers shared by the raw payload types.
//!
//! Upstream documents are sparse and loosely typed. These helpers keep that
//! looseness at the deserialization boundary so the normalizers only ever see
//! plain Rust values.

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` like a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a text leaf without failing the document on a type mismatch.
///
/// Numbers keep their display form; objects, arrays and booleans become
/// `None`. Strings are kept verbatim, padding included.
pub(crate) fn lenient_text<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Scalar::to_raw_text))
}

/// A JSON scalar whose upstream type is not stable (`1999` vs `"1999"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
    /// Booleans, arrays and objects. Carries no usable value.
    Other(serde_json::Value),
}

impl Scalar {
    /// Display form, `None` when empty or not a scalar.
    pub fn to_text(&self) -> Option<String> {
        let text = match self {
            Self::Integer(value) => value.to_string(),
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                format!("{value:.0}")
            }
            Self::Float(value) if value.is_finite() => value.to_string(),
            Self::Text(value) => value.trim().to_string(),
            Self::Float(_) | Self::Other(_) => return None,
        };
        (!text.is_empty()).then_some(text)
    }

    /// Like [`Scalar::to_text`] but keeps strings exactly as sent.
    ///
    /// Only an empty string is treated as missing.
    pub fn to_raw_text(&self) -> Option<String> {
        match self {
            Self::Text(value) if value.is_empty() => None,
            Self::Text(value) => Some(value.clone()),
            other => other.to_text(),
        }
    }

    /// Strictly positive whole number, truncating fractions.
    pub fn to_positive_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(value) => u64::try_from(*value).ok(),
            Self::Float(value) if value.is_finite() && *value >= 1.0 => {
                Some(value.trunc() as u64)
            }
            Self::Text(value) => {
                let value = value.trim();
                value.parse::<u64>().ok().or_else(|| {
                    value
                        .parse::<f64>()
                        .ok()
                        .and_then(|parsed| Self::Float(parsed).to_positive_integer())
                })
            }
            Self::Float(_) | Self::Other(_) => None,
        }
        .filter(|value| *value > 0)
    }
}
