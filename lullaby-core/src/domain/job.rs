//! Job domain types
//!
//! A job is one unit of asynchronous generative work handed to the external
//! inference provider: a narration track or a background sound effect. The
//! provider does not answer synchronously; callers hold a [`JobHandle`] and
//! poll until a terminal [`JobState`] is reached.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The kinds of generative work the provider runs asynchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobKind {
    Narration,
    SoundEffect,
}

/// Description of one job to submit.
///
/// Built once from caller input, never mutated. The `parameters` map holds
/// the provider-side `input` object verbatim (text, voice, language,
/// seconds_total, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequest {
    pub kind: JobKind,
    pub model_id: String,
    pub parameters: HashMap<String, serde_json::Value>,
}

impl JobRequest {
    /// Builds a text-to-speech narration request.
    pub fn narration(
        model_id: impl Into<String>,
        text: impl Into<String>,
        voice: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        let mut parameters = HashMap::new();
        parameters.insert("text".to_string(), serde_json::Value::from(text.into()));
        parameters.insert("voice".to_string(), serde_json::Value::from(voice.into()));
        parameters.insert(
            "language".to_string(),
            serde_json::Value::from(language.into()),
        );
        Self {
            kind: JobKind::Narration,
            model_id: model_id.into(),
            parameters,
        }
    }

    /// Builds a text-to-audio sound effect request of `seconds` length.
    pub fn sound_effect(
        model_id: impl Into<String>,
        prompt: impl Into<String>,
        seconds: u32,
    ) -> Self {
        let mut parameters = HashMap::new();
        parameters.insert("prompt".to_string(), serde_json::Value::from(prompt.into()));
        parameters.insert("seconds_total".to_string(), serde_json::Value::from(seconds));
        Self {
            kind: JobKind::SoundEffect,
            model_id: model_id.into(),
            parameters,
        }
    }
}

/// Handle returned by a successful submission.
///
/// `request_id` is the provider-assigned opaque identifier used for every
/// subsequent status and result call. Owned by the poll loop that issued it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobHandle {
    pub request_id: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

impl JobHandle {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            submitted_at: chrono::Utc::now(),
        }
    }
}

/// Lifecycle of a submitted job.
///
/// `Submitted → Pending → Completed | Failed | TimedOut`. Only `Pending` is
/// revisited; exactly one terminal state is ever reached per handle.
/// `TimedOut` is a local decision (poll budget exhausted), never reported by
/// the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    Submitted,
    Pending,
    Completed,
    Failed,
    TimedOut,
}

impl JobState {
    /// Maps a provider-reported status string onto the lifecycle.
    ///
    /// The provider's status vocabulary is open-ended; anything that is not
    /// a known terminal label counts as still in flight.
    pub fn from_provider_status(status: &str) -> Self {
        match status.trim().to_ascii_uppercase().as_str() {
            "COMPLETED" => JobState::Completed,
            "FAILED" => JobState::Failed,
            _ => JobState::Pending,
        }
    }

    /// True once no further transition can occur.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobState::Completed | JobState::Failed | JobState::TimedOut
        )
    }
}

/// The generated output of a completed job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobArtifact {
    pub request_id: String,
    pub url: String,
}

/// Caller-facing failure taxonomy.
///
/// Every failure of the submit/poll/extract chain is converted into exactly
/// one of these kinds; none is retried automatically. `JobTimedOut` means
/// the job may still complete provider-side ("check back later"), while
/// `JobFailed` means the provider itself declared the job broken.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("job submission failed: {0}")]
    SubmissionFailed(String),

    #[error("provider reported job failure: {0}")]
    JobFailed(String),

    #[error("job still pending after {attempts} status checks")]
    JobTimedOut { attempts: u32 },

    #[error("status polling unavailable: {0}")]
    PollingUnavailable(String),

    #[error("completed job response contained no artifact url")]
    ResultMalformed,
}

impl JobError {
    pub fn kind(&self) -> JobErrorKind {
        match self {
            JobError::SubmissionFailed(_) => JobErrorKind::SubmissionFailed,
            JobError::JobFailed(_) => JobErrorKind::JobFailed,
            JobError::JobTimedOut { .. } => JobErrorKind::JobTimedOut,
            JobError::PollingUnavailable(_) => JobErrorKind::PollingUnavailable,
            JobError::ResultMalformed => JobErrorKind::ResultMalformed,
        }
    }
}

/// Serializable tag for [`JobError`], carried in wire responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobErrorKind {
    SubmissionFailed,
    JobFailed,
    JobTimedOut,
    PollingUnavailable,
    ResultMalformed,
}
