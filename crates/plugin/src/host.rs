//! Minimal model of the host agent framework's plugin contract.
//!
//! The real contract is owned by the external framework; these shapes cover
//! exactly what the three TrustGate hooks need: an inbound message, an action
//! outcome, a gate verdict, and the asynchronous handler traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An inbound message handed to a hook by the host framework.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentMessage {
    /// Free-form message text.
    pub text: String,
}

impl AgentMessage {
    /// Wrap raw text as a message.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Result shape returned by an action handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// Whether the action completed its work.
    pub success: bool,
    /// Chat-facing reply text.
    pub text: String,
}

impl ActionOutcome {
    /// Successful outcome with reply text.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
        }
    }

    /// Failed outcome with a user-visible failure message.
    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
        }
    }
}

/// Result shape returned by the gate evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateVerdict {
    /// Whether further agent action may proceed.
    pub pass: bool,
    /// Human-readable reason.
    pub message: String,
}

impl GateVerdict {
    /// Passing verdict.
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            pass: true,
            message: message.into(),
        }
    }

    /// Blocking verdict.
    pub fn block(message: impl Into<String>) -> Self {
        Self {
            pass: false,
            message: message.into(),
        }
    }
}

/// A chat-visible action the agent can run on a message.
#[async_trait]
pub trait Action: Send + Sync {
    /// Stable hook name.
    fn name(&self) -> &'static str;

    /// One-line description shown to the host framework.
    fn description(&self) -> &'static str;

    /// Cheap applicability check. Must not perform network calls.
    async fn validate(&self, message: &AgentMessage) -> bool;

    /// Run the action and produce a chat reply.
    async fn handle(&self, message: &AgentMessage) -> ActionOutcome;
}

/// A gating evaluator run before further agent action.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Stable hook name.
    fn name(&self) -> &'static str;

    /// One-line description shown to the host framework.
    fn description(&self) -> &'static str;

    /// Screen the message and return a verdict.
    async fn evaluate(&self, message: &AgentMessage) -> GateVerdict;
}

/// A context provider contributing background text to the agent prompt.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable hook name.
    fn name(&self) -> &'static str;

    /// One-line description shown to the host framework.
    fn description(&self) -> &'static str;

    /// Produce context text for this message.
    async fn get(&self, message: &AgentMessage) -> String;
}
