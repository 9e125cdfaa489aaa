//! Core types for TrustGate.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::EvmAddress;
use crate::error::CoreError;

/// Minimum trust score.
pub const MIN_SCORE: f64 = 0.0;

/// Maximum trust score.
pub const MAX_SCORE: f64 = 10.0;

/// Trust score ranging from 0 to 10, as rated by the remote scoring service.
///
/// This type enforces validation during both construction and deserialization
/// to prevent out-of-range values from entering the system.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TrustScore(f64);

impl TrustScore {
    /// Create a new TrustScore, validating the range.
    pub fn new(value: f64) -> Result<Self, CoreError> {
        if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return Err(CoreError::InvalidScore(value));
        }
        Ok(TrustScore(value))
    }

    /// Get the raw value.
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Whether this score clears the given minimum threshold.
    pub fn meets(&self, min_score: f64) -> bool {
        self.0 >= min_score
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TrustScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TrustScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Deserialize as f64, then validate through TrustScore::new
        let value = f64::deserialize(deserializer)?;
        TrustScore::new(value).map_err(|e| serde::de::Error::custom(format!("{}", e)))
    }
}

/// The scoring outcome for one address, valid for a single request/response
/// round trip. Never cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustResult {
    /// The scored address.
    pub address: EvmAddress,
    /// Numeric trust score (0-10).
    pub score: TrustScore,
    /// Coarse risk category label, derived by the remote service (e.g. LOW, CRITICAL).
    pub risk: String,
    /// Entity type label (e.g. EOA, CONTRACT).
    pub entity: String,
    /// Ordered flag strings attached by the remote service.
    pub flags: Vec<String>,
    /// Whether the score clears the configured minimum threshold.
    pub safe: bool,
}

impl TrustResult {
    /// Build a result, deriving `safe` from the threshold.
    pub fn new(
        address: EvmAddress,
        score: TrustScore,
        risk: String,
        entity: String,
        flags: Vec<String>,
        min_score: f64,
    ) -> Self {
        let safe = score.meets(min_score);
        TrustResult {
            address,
            score,
            risk,
            entity,
            flags,
            safe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_creation() {
        assert!(TrustScore::new(-0.1).is_err());
        assert!(TrustScore::new(10.1).is_err());
        assert!(TrustScore::new(f64::NAN).is_err());
        assert!(TrustScore::new(f64::INFINITY).is_err());

        for v in [0.0, 2.5, 5.0, 7.9, 10.0] {
            let score = TrustScore::new(v).unwrap();
            assert_eq!(score.value(), v);
        }
    }

    #[test]
    fn test_score_meets_threshold() {
        let score = TrustScore::new(5.0).unwrap();
        assert!(score.meets(5.0));
        assert!(score.meets(4.9));
        assert!(!score.meets(5.1));
    }

    #[test]
    fn test_score_deserialization_valid() {
        let score: TrustScore = serde_json::from_str("7.5").unwrap();
        assert_eq!(score.value(), 7.5);
    }

    #[test]
    fn test_score_deserialization_invalid() {
        for json in ["-1", "10.5", "127"] {
            let result: Result<TrustScore, _> = serde_json::from_str(json);
            assert!(
                result.is_err(),
                "Expected deserialization to fail for value {}, but it succeeded",
                json
            );
            let err_msg = result.unwrap_err().to_string();
            assert!(
                err_msg.contains("Invalid trust score"),
                "Error message should mention invalid score: {}",
                err_msg
            );
        }
    }

    #[test]
    fn test_score_in_struct_rejected() {
        // TrustScore validation must also hold when embedded in other structs
        #[derive(Deserialize)]
        struct Wrapper {
            score: TrustScore,
        }

        let valid: Result<Wrapper, _> = serde_json::from_str(r#"{"score": 8.2}"#);
        assert_eq!(valid.unwrap().score.value(), 8.2);

        let invalid: Result<Wrapper, _> = serde_json::from_str(r#"{"score": 42}"#);
        assert!(invalid.is_err(), "Should reject out-of-range score in struct");
    }

    #[test]
    fn test_result_safe_derivation() {
        let address: EvmAddress = "0x1234567890abcdef1234567890abcdef12345678"
            .parse()
            .unwrap();

        let safe = TrustResult::new(
            address.clone(),
            TrustScore::new(7.0).unwrap(),
            "LOW".to_string(),
            "EOA".to_string(),
            vec![],
            5.0,
        );
        assert!(safe.safe);

        let unsafe_ = TrustResult::new(
            address,
            TrustScore::new(2.0).unwrap(),
            "CRITICAL".to_string(),
            "CONTRACT".to_string(),
            vec!["mixer".to_string()],
            5.0,
        );
        assert!(!unsafe_.safe);
    }
}
