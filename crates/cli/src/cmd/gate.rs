use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use trustgate_client::TrustClient;
use trustgate_plugin::{AgentMessage, Evaluator, TrustGateEvaluator};

use super::ConfigArgs;

#[derive(Debug, Args)]
pub struct GateArgs {
    /// Free text to screen (the first 0x address found is gated)
    text: String,

    #[command(flatten)]
    config: ConfigArgs,
}

/// Run the gate. Returns whether the text passed; the caller maps a blocking
/// verdict to a non-zero exit code.
pub async fn run(args: GateArgs) -> Result<bool> {
    let config = args.config.resolve()?;
    let client = TrustClient::new(config).context("Failed to build client")?;
    let gate = TrustGateEvaluator::new(Arc::new(client));

    let verdict = gate.evaluate(&AgentMessage::new(args.text)).await;
    println!("{}", verdict.message);
    println!("{}", if verdict.pass { "PASS" } else { "BLOCK" });

    Ok(verdict.pass)
}
