//! Address shape checking and free-text extraction.
//!
//! Addresses are treated as opaque identifiers: the only validation anywhere
//! in TrustGate is the regular-expression shape check below. No EIP-55
//! checksum verification is performed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// Anchored form for whole-string validation, bare form for scanning text.
static ADDRESS_EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("valid address regex"));
static ADDRESS_SCAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"0x[a-fA-F0-9]{40}").expect("valid address regex"));

/// A 40-hex-character value prefixed with `0x`.
///
/// The original casing of the matched text is preserved; comparisons are
/// case-insensitive over the hex digits.
#[derive(Debug, Clone)]
pub struct EvmAddress(String);

impl Serialize for EvmAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EvmAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Deserialize as a string, then apply the shape check
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|e| serde::de::Error::custom(format!("{}", e)))
    }
}

impl EvmAddress {
    /// View the address as a `0x`-prefixed string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EvmAddress {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for EvmAddress {}

impl FromStr for EvmAddress {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !ADDRESS_EXACT.is_match(s) {
            return Err(CoreError::InvalidAddress(s.to_string()));
        }
        Ok(EvmAddress(s.to_string()))
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extract the first well-formed address from free text.
///
/// Returns exactly the matched substring; surrounding punctuation or longer
/// hex runs never widen the match.
pub fn extract_address(text: &str) -> Option<EvmAddress> {
    ADDRESS_SCAN
        .find(text)
        .map(|m| EvmAddress(m.as_str().to_string()))
}
