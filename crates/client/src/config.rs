//! Configuration for the TrustGate adapter.
//!
//! Configuration is a small immutable value object supplied once at plugin
//! construction and closed over by all three hooks. It can be built from
//! environment variables or directly.

use crate::client::ClientError;
use trustgate_core::types::{MAX_SCORE, MIN_SCORE};

/// Default chain selector.
pub const DEFAULT_CHAIN: &str = "eth";

/// Default minimum score required for an address to be considered safe.
pub const DEFAULT_MIN_SCORE: f64 = 5.0;

/// Immutable runtime configuration for the TrustGate adapter.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Base URL of the remote scoring service.
    pub api_url: String,
    /// Optional bearer credential.
    pub api_key: Option<String>,
    /// Chain selector passed through as the `chain` query parameter.
    pub chain: String,
    /// Minimum score required for `safe = true`.
    pub min_score: f64,
}

impl GateConfig {
    /// Build configuration from environment variables.
    ///
    /// - `TRUSTGATE_API_URL` (required)
    /// - `TRUSTGATE_API_KEY` (optional)
    /// - `TRUSTGATE_CHAIN` (default `eth`)
    /// - `TRUSTGATE_MIN_SCORE` (default 5.0, must lie in 0-10)
    pub fn from_env() -> Result<Self, ClientError> {
        let api_url = std::env::var("TRUSTGATE_API_URL")
            .map_err(|_| ClientError::Config("TRUSTGATE_API_URL is not set".to_string()))?;
        if api_url.trim().is_empty() {
            return Err(ClientError::Config("TRUSTGATE_API_URL is empty".to_string()));
        }

        let api_key = std::env::var("TRUSTGATE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let chain = std::env::var("TRUSTGATE_CHAIN")
            .ok()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CHAIN.to_string());

        let min_score = match std::env::var("TRUSTGATE_MIN_SCORE") {
            Ok(raw) => raw.trim().parse::<f64>().map_err(|_| {
                ClientError::Config(format!("Invalid TRUSTGATE_MIN_SCORE: {:?} (expected number)", raw))
            })?,
            Err(_) => DEFAULT_MIN_SCORE,
        };

        let config = Self {
            api_url,
            api_key,
            chain,
            min_score,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build deterministic test configuration against a local endpoint.
    pub fn for_test(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: None,
            chain: DEFAULT_CHAIN.to_string(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }

    /// Check invariants that from_env and manual construction must both hold.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.api_url.trim().is_empty() {
            return Err(ClientError::Config("api_url is empty".to_string()));
        }
        if !self.min_score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&self.min_score) {
            return Err(ClientError::Config(format!(
                "Invalid min_score: {} (must be between 0 and 10)",
                self.min_score
            )));
        }
        Ok(())
    }
}
