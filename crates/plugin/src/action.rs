//! The GET_TRUST_SCORE chat action.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::host::{Action, ActionOutcome, AgentMessage};
use crate::render::summarize;
use trustgate_client::TrustClient;
use trustgate_core::extract_address;

/// Fetches the trust score for the first address in the message and replies
/// with a formatted summary.
pub struct TrustScoreAction {
    client: Arc<TrustClient>,
}

impl TrustScoreAction {
    /// Create the action sharing the plugin's client.
    pub fn new(client: Arc<TrustClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Action for TrustScoreAction {
    fn name(&self) -> &'static str {
        "GET_TRUST_SCORE"
    }

    fn description(&self) -> &'static str {
        "Fetch the on-chain trust score for a 0x address mentioned in the message"
    }

    async fn validate(&self, message: &AgentMessage) -> bool {
        extract_address(&message.text).is_some()
    }

    async fn handle(&self, message: &AgentMessage) -> ActionOutcome {
        let Some(address) = extract_address(&message.text) else {
            return ActionOutcome::failed("No 0x address found in the message.");
        };

        match self.client.fetch_score(&address).await {
            Ok(result) => ActionOutcome::ok(summarize(&result)),
            Err(e) => {
                warn!(%address, error = %e, "trust score fetch failed");
                ActionOutcome::failed(format!("Unable to fetch the trust score for {address}."))
            }
        }
    }
}
