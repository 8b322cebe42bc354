//! Audio job DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::JobErrorKind;

/// Request to submit a narration (text-to-speech) job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNarration {
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_language")]
    pub language: String,
}

/// Request to submit a background sound (text-to-audio) job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSoundEffect {
    pub prompt: String,
    #[serde(default = "default_duration")]
    pub duration: u32,
}

/// Response to a successful submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSubmitted {
    pub request_id: String,
    pub status: String,
}

impl JobSubmitted {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            status: "SUBMITTED".to_string(),
        }
    }
}

/// Provider job status, passed through to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusReport {
    pub status: String,
}

/// Artifact location of a completed job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactLocation {
    pub audio_url: String,
}

/// Outcome of a composed run-to-completion call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedRun {
    pub request_id: String,
    pub audio_url: String,
}

/// Failure body carried alongside non-2xx job responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFailure {
    pub error_kind: JobErrorKind,
    pub error: String,
}

fn default_voice() -> String {
    "Rachel".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_duration() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narration_defaults() {
        let req: CreateNarration = serde_json::from_str(r#"{"text":"Hello"}"#).unwrap();
        assert_eq!(req.voice, "Rachel");
        assert_eq!(req.language, "en");
    }

    #[test]
    fn test_sound_effect_defaults() {
        let req: CreateSoundEffect =
            serde_json::from_str(r#"{"prompt":"soft rain"}"#).unwrap();
        assert_eq!(req.duration, 10);
    }

    #[test]
    fn test_job_submitted_status() {
        let submitted = JobSubmitted::new("req-1");
        assert_eq!(submitted.status, "SUBMITTED");
    }
}
