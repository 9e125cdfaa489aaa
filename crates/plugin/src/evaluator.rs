//! The TRUST_GATE evaluator.
//!
//! The gate is the one deliberate safety policy in the adapter: any failure
//! to obtain a score blocks the address (fail closed).

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::host::{AgentMessage, Evaluator, GateVerdict};
use trustgate_client::TrustClient;
use trustgate_core::extract_address;

/// Blocks further agent action on low-trust addresses.
pub struct TrustGateEvaluator {
    client: Arc<TrustClient>,
}

impl TrustGateEvaluator {
    /// Create the evaluator sharing the plugin's client.
    pub fn new(client: Arc<TrustClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Evaluator for TrustGateEvaluator {
    fn name(&self) -> &'static str {
        "TRUST_GATE"
    }

    fn description(&self) -> &'static str {
        "Block interactions with 0x addresses whose trust score is below the configured minimum"
    }

    async fn evaluate(&self, message: &AgentMessage) -> GateVerdict {
        // Nothing to screen without an address in the message.
        let Some(address) = extract_address(&message.text) else {
            return GateVerdict::pass("No 0x address to screen.");
        };

        match self.client.fetch_score(&address).await {
            Ok(result) if result.safe => {
                info!(%address, score = result.score.value(), "trust gate passed");
                GateVerdict::pass(format!(
                    "Address {address} passed the trust gate with score {}/10.",
                    result.score
                ))
            }
            Ok(result) => {
                info!(%address, score = result.score.value(), risk = %result.risk, "trust gate blocked");
                GateVerdict::block(format!(
                    "Address {address} blocked: trust score {}/10 is below the minimum {} ({} risk).",
                    result.score,
                    self.client.min_score(),
                    result.risk
                ))
            }
            Err(e) => {
                // Fail closed: an unverifiable address is a blocked address.
                warn!(%address, error = %e, "trust check failed, blocking by default");
                GateVerdict::block(format!(
                    "Trust check unavailable for {address}; blocked by default."
                ))
            }
        }
    }
}
