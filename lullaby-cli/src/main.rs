//! Lullaby CLI
//!
//! Command-line companion for the Lullaby backend: one-off narration runs
//! and batch voice-sample generation, reusing the same job engine as the
//! server.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "lullaby")]
#[command(about = "Lullaby bedtime-story backend CLI", long_about = None)]
struct Cli {
    /// Inference provider API key
    #[arg(long, env = "INFERENCE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Inference provider base URL
    #[arg(
        long,
        env = "INFERENCE_BASE_URL",
        default_value = lullaby_engine::config::DEFAULT_BASE_URL
    )]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        api_key: cli.api_key,
        base_url: cli.base_url,
    };

    handle_command(cli.command, &config).await
}
