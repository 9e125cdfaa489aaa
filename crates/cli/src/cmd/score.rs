use anyhow::{Context, Result};
use clap::Args;

use trustgate_client::TrustClient;
use trustgate_core::EvmAddress;

use super::ConfigArgs;

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Address to score (0x + 40 hex characters)
    address: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

pub async fn run(args: ScoreArgs) -> Result<()> {
    let address: EvmAddress = args
        .address
        .parse()
        .with_context(|| format!("Invalid address: {}", args.address))?;

    let config = args.config.resolve()?;
    let min_score = config.min_score;
    let client = TrustClient::new(config).context("Failed to build client")?;

    let result = client
        .fetch_score(&address)
        .await
        .context("Failed to fetch trust score")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Address:  {}", result.address);
    println!("Score:    {}/10 (minimum {})", result.score, min_score);
    println!("Risk:     {}", result.risk);
    println!("Type:     {}", result.entity);
    if result.flags.is_empty() {
        println!("Flags:    none");
    } else {
        println!("Flags:    {}", result.flags.join(", "));
    }
    println!("Safe:     {}", if result.safe { "yes" } else { "no" });

    Ok(())
}
