//! Engine configuration
//!
//! Defines all configurable parameters for the job engine including the
//! provider credentials, polling budget, and model identifiers.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://inference.do-ai.run/v1";
pub const DEFAULT_STORY_MODEL: &str = "llama3.3-70b-instruct";
pub const DEFAULT_NARRATION_MODEL: &str = "fal-ai/elevenlabs/tts/multilingual-v2";
pub const DEFAULT_SOUND_MODEL: &str = "fal-ai/stable-audio-25/text-to-audio";

/// Engine configuration
///
/// Immutable once constructed and injected into the orchestrator. A missing
/// API key is a construction-time error, never a per-call check.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Bearer token for the inference provider
    pub api_key: String,

    /// Provider base URL
    pub base_url: String,

    /// Fixed delay between successive status checks
    pub poll_interval: Duration,

    /// Maximum number of status checks before a job is declared timed out
    pub max_poll_attempts: u32,

    /// Consecutive transport errors tolerated before polling is declared
    /// unavailable
    pub network_error_threshold: u32,

    /// Chat model used for story and music-prompt text
    pub story_model: String,

    /// Text-to-speech model for narration jobs
    pub narration_model: String,

    /// Text-to-audio model for sound jobs
    pub sound_model: String,
}

impl EngineConfig {
    /// Creates a new configuration with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: Duration::from_secs(2),
            max_poll_attempts: 60,
            network_error_threshold: 3,
            story_model: DEFAULT_STORY_MODEL.to_string(),
            narration_model: DEFAULT_NARRATION_MODEL.to_string(),
            sound_model: DEFAULT_SOUND_MODEL.to_string(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - INFERENCE_API_KEY (required)
    /// - INFERENCE_BASE_URL (optional, default: the DO inference gateway)
    /// - POLL_INTERVAL (optional, seconds, default: 2)
    /// - MAX_POLL_ATTEMPTS (optional, default: 60)
    /// - NETWORK_ERROR_THRESHOLD (optional, default: 3)
    /// - STORY_MODEL / NARRATION_MODEL / SOUND_MODEL (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("INFERENCE_API_KEY")
            .map_err(|_| anyhow::anyhow!("INFERENCE_API_KEY environment variable not set"))?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = std::env::var("INFERENCE_BASE_URL") {
            config.base_url = base_url;
        }

        if let Some(secs) = std::env::var("POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.poll_interval = Duration::from_secs(secs);
        }

        if let Some(attempts) = std::env::var("MAX_POLL_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
        {
            config.max_poll_attempts = attempts;
        }

        if let Some(threshold) = std::env::var("NETWORK_ERROR_THRESHOLD")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
        {
            config.network_error_threshold = threshold;
        }

        if let Ok(model) = std::env::var("STORY_MODEL") {
            config.story_model = model;
        }
        if let Ok(model) = std::env::var("NARRATION_MODEL") {
            config.narration_model = model;
        }
        if let Ok(model) = std::env::var("SOUND_MODEL") {
            config.sound_model = model;
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!("api_key cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.max_poll_attempts == 0 {
            anyhow::bail!("max_poll_attempts must be greater than 0");
        }

        Ok(())
    }
}
