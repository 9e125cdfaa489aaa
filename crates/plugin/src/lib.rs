//! TrustGate plugin surface for the host agent framework.
//!
//! This crate provides:
//! - `TrustGatePlugin` - plugin descriptor aggregating the three hooks
//! - `GET_TRUST_SCORE` action - fetch and report a score in chat
//! - `TRUST_GATE` evaluator - block low-trust addresses (fails closed)
//! - `trust_context` provider - trust context for the agent prompt
//!
//! All hooks share one immutable `GateConfig` (and one `TrustClient`) supplied
//! at construction; there is no other state.

#![warn(missing_docs)]

pub mod action;
pub mod evaluator;
pub mod host;
pub mod provider;
mod render;

use std::sync::Arc;

pub use action::TrustScoreAction;
pub use evaluator::TrustGateEvaluator;
pub use host::{Action, ActionOutcome, AgentMessage, Evaluator, GateVerdict, Provider};
pub use provider::TrustContextProvider;

use trustgate_client::{ClientError, GateConfig, TrustClient};

/// The plugin descriptor handed to the host framework.
pub struct TrustGatePlugin {
    /// Plugin name.
    pub name: &'static str,
    /// Plugin description.
    pub description: &'static str,
    /// Chat actions.
    pub actions: Vec<Arc<dyn Action>>,
    /// Gating evaluators.
    pub evaluators: Vec<Arc<dyn Evaluator>>,
    /// Context providers.
    pub providers: Vec<Arc<dyn Provider>>,
}

impl TrustGatePlugin {
    /// Build the plugin from configuration, wiring all three hooks to one
    /// shared client.
    pub fn new(config: GateConfig) -> Result<Self, ClientError> {
        let client = Arc::new(TrustClient::new(config)?);

        Ok(Self {
            name: "trustgate",
            description: "On-chain trust scoring: score lookups and a low-trust address gate",
            actions: vec![Arc::new(TrustScoreAction::new(client.clone()))],
            evaluators: vec![Arc::new(TrustGateEvaluator::new(client.clone()))],
            providers: vec![Arc::new(TrustContextProvider::new(client))],
        })
    }
}
