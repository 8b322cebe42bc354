//! Narrate command handler
//!
//! Runs one narration job to completion and writes the audio to disk.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use lullaby_core::domain::job::JobRequest;
use lullaby_engine::Orchestrator;
use std::path::PathBuf;

use crate::config::Config;

/// Narrate command arguments
#[derive(Args)]
pub struct NarrateArgs {
    /// Text to narrate
    pub text: String,

    /// Voice name
    #[arg(short, long, default_value = "Rachel")]
    pub voice: String,

    /// Narration language code
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Output file
    #[arg(short, long, default_value = "narration.mp3")]
    pub output: PathBuf,
}

/// Handle the narrate command
pub async fn handle_narrate(args: NarrateArgs, config: &Config) -> Result<()> {
    let engine_config = config.engine();
    let orchestrator = Orchestrator::new(&engine_config);

    println!(
        "{}",
        format!("Narrating with voice {}...", args.voice).bold()
    );

    let request = JobRequest::narration(
        &engine_config.narration_model,
        args.text,
        args.voice,
        args.language,
    );

    let artifact = orchestrator
        .run(request)
        .await
        .context("Narration job failed")?;

    println!("  {} {}", "▸".cyan(), artifact.url.dimmed());

    let bytes = orchestrator
        .client()
        .download_artifact(&artifact.url)
        .await
        .context("Failed to download narration audio")?;

    std::fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "{}",
        format!("Saved {} ({} bytes)", args.output.display(), bytes.len()).green()
    );

    Ok(())
}
