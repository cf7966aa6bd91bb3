//! `antfeat`: inspect feature extractor descriptors against world snapshots.
//!
//! Run with: `antfeat <command>`; see `antfeat --help`.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Check, Eval, Names};
use config::CliConfig;

/// Inspect ant feature extractors
#[derive(Parser)]
#[command(name = "antfeat")]
#[command(about = "Inspect ant feature extractor descriptors", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print the index and name of every feature
    Names(Names),

    /// Evaluate one decision cycle over a world snapshot
    Eval(Eval),

    /// Verify that a descriptor survives an encode/decode round trip
    Check(Check),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ANTFEAT_* variables)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = CliConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Names(cmd) => cmd.execute(&config),
        Command::Eval(cmd) => cmd.execute(&config),
        Command::Check(cmd) => cmd.execute(&config),
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
