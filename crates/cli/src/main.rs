//! TrustGate operator CLI.
//!
//! - `trustgate score <address>` - fetch and print a trust score
//! - `trustgate gate <text>` - run the trust gate over free text

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;

#[derive(Debug, Parser)]
#[command(name = "trustgate")]
#[command(version, about = "Query the remote trust-scoring service and run the trust gate")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the trust score for one address.
    Score(cmd::score::ScoreArgs),
    /// Extract an address from text and run the trust gate over it.
    Gate(cmd::gate::GateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug);

    match cli.command {
        Command::Score(args) => cmd::score::run(args).await?,
        Command::Gate(args) => {
            let pass = cmd::gate::run(args).await?;
            if !pass {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Initialize tracing subscriber for logging
fn init_logging(debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = if debug {
        EnvFilter::new("trustgate_client=debug,trustgate_plugin=debug,trustgate_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
