//! The trust_context provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::host::{AgentMessage, Provider};
use crate::render::summarize;
use trustgate_client::TrustClient;
use trustgate_core::extract_address;

/// Static capability blurb used when there is nothing to look up.
const CAPABILITY_BLURB: &str = "TrustGate can look up on-chain trust scores (0-10) for \
0x addresses and blocks low-trust addresses from further action.";

/// Contributes trust context for the agent prompt. When the message names an
/// address the provider fetches its score; otherwise (or on any fetch error)
/// it falls back to a static capability description.
pub struct TrustContextProvider {
    client: Arc<TrustClient>,
}

impl TrustContextProvider {
    /// Create the provider sharing the plugin's client.
    pub fn new(client: Arc<TrustClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Provider for TrustContextProvider {
    fn name(&self) -> &'static str {
        "trust_context"
    }

    fn description(&self) -> &'static str {
        "Contribute on-chain trust context for 0x addresses mentioned in the message"
    }

    async fn get(&self, message: &AgentMessage) -> String {
        let Some(address) = extract_address(&message.text) else {
            return CAPABILITY_BLURB.to_string();
        };

        match self.client.fetch_score(&address).await {
            Ok(result) => summarize(&result),
            Err(e) => {
                warn!(%address, error = %e, "trust context fetch failed");
                CAPABILITY_BLURB.to_string()
            }
        }
    }
}
