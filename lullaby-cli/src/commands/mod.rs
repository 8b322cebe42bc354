//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod narrate;
mod samples;

pub use narrate::NarrateArgs;
pub use samples::SamplesArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Narrate a text and save the audio locally
    Narrate(NarrateArgs),
    /// Generate voice samples for the known narration voices
    Samples(SamplesArgs),
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Narrate(args) => narrate::handle_narrate(args, config).await,
        Commands::Samples(args) => samples::handle_samples(args, config).await,
    }
}
