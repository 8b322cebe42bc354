//! Samples command handler
//!
//! Batch-generates short voice samples, one file per voice and language,
//! reusing the job engine in a loop. Existing files are skipped so reruns
//! only fill gaps.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use lullaby_core::domain::job::JobRequest;
use lullaby_engine::Orchestrator;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Narration voices offered by the TTS model
const VOICES: &[&str] = &[
    "Rachel", "Aria", "Roger", "Sarah", "Laura", "Charlie", "George", "Callum", "River", "Liam",
    "Charlotte", "Alice", "Matilda", "Will", "Jessica", "Eric", "Chris", "Brian", "Daniel", "Lily",
    "Bill",
];

/// Sample line per language; `{name}` is replaced with the voice name
const LANGUAGES: &[(&str, &str)] = &[
    ("en", "Hi, I'm {name}. Let me tell you a story."),
    ("hi", "नमस्ते, मैं {name} हूं। आइए, एक कहानी सुनते हैं।"),
];

/// Samples command arguments
#[derive(Args)]
pub struct SamplesArgs {
    /// Output directory for the generated samples
    #[arg(short, long, default_value = "static/voice-samples")]
    pub out_dir: PathBuf,

    /// Only generate samples for these voices (default: all)
    #[arg(long)]
    pub voice: Vec<String>,
}

/// Handle the samples command
pub async fn handle_samples(args: SamplesArgs, config: &Config) -> Result<()> {
    let engine_config = config.engine();
    let orchestrator = Orchestrator::new(&engine_config);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    let voices: Vec<&str> = if args.voice.is_empty() {
        VOICES.to_vec()
    } else {
        VOICES
            .iter()
            .copied()
            .filter(|v| args.voice.iter().any(|w| w.eq_ignore_ascii_case(v)))
            .collect()
    };

    println!(
        "{}",
        format!(
            "Generating {} voice sample(s) into {}",
            voices.len() * LANGUAGES.len(),
            args.out_dir.display()
        )
        .bold()
    );
    println!();

    let mut generated = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for &voice in &voices {
        for &(language, template) in LANGUAGES {
            let filename = sample_filename(voice, language);
            let path = args.out_dir.join(&filename);

            if path.exists() {
                println!("  {} {} (already exists)", "·".dimmed(), filename.dimmed());
                skipped += 1;
                continue;
            }

            let text = template.replace("{name}", voice);

            match generate_sample(
                &orchestrator,
                &engine_config.narration_model,
                voice,
                language,
                &text,
                &path,
            )
            .await
            {
                Ok(()) => {
                    println!("  {} {}", "✓".green(), filename);
                    generated += 1;
                }
                Err(e) => {
                    println!("  {} {} ({:#})", "✗".red(), filename, e);
                    failed += 1;
                }
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Done! Generated: {}, skipped: {}, failed: {}",
            generated, skipped, failed
        )
        .bold()
    );

    if failed > 0 {
        anyhow::bail!("{} sample(s) failed", failed);
    }

    Ok(())
}

/// English samples keep the bare voice name; other languages get a suffix
fn sample_filename(voice: &str, language: &str) -> String {
    if language == "en" {
        format!("{}.mp3", voice.to_lowercase())
    } else {
        format!("{}_{}.mp3", voice.to_lowercase(), language)
    }
}

/// Generate and save one voice sample
async fn generate_sample(
    orchestrator: &Orchestrator,
    model: &str,
    voice: &str,
    language: &str,
    text: &str,
    path: &Path,
) -> Result<()> {
    let request = JobRequest::narration(model, text, voice, language);

    let artifact = orchestrator
        .run(request)
        .await
        .context("narration job failed")?;

    let bytes = orchestrator
        .client()
        .download_artifact(&artifact.url)
        .await
        .context("download failed")?;

    std::fs::write(path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_filenames() {
        assert_eq!(sample_filename("Rachel", "en"), "rachel.mp3");
        assert_eq!(sample_filename("Rachel", "hi"), "rachel_hi.mp3");
        assert_eq!(sample_filename("Bill", "en"), "bill.mp3");
    }
}
