pub mod gate;
pub mod score;

use anyhow::{Context, Result};
use clap::Args;
use trustgate_client::{GateConfig, DEFAULT_CHAIN, DEFAULT_MIN_SCORE};

/// Configuration flags shared by subcommands; unset flags fall back to the
/// TRUSTGATE_* environment.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Base URL of the scoring service
    #[arg(long, env = "TRUSTGATE_API_URL")]
    api_url: Option<String>,
    /// Bearer credential
    #[arg(long, env = "TRUSTGATE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Chain selector
    #[arg(long, env = "TRUSTGATE_CHAIN")]
    chain: Option<String>,
    /// Minimum score for an address to be considered safe
    #[arg(long, env = "TRUSTGATE_MIN_SCORE")]
    min_score: Option<f64>,
}

impl ConfigArgs {
    pub fn resolve(self) -> Result<GateConfig> {
        let api_url = self
            .api_url
            .filter(|u| !u.trim().is_empty())
            .context("Missing scoring service URL (set TRUSTGATE_API_URL or pass --api-url)")?;

        let config = GateConfig {
            api_url,
            api_key: self.api_key.filter(|k| !k.trim().is_empty()),
            chain: self
                .chain
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CHAIN.to_string()),
            min_score: self.min_score.unwrap_or(DEFAULT_MIN_SCORE),
        };

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}
