//! Job submission
//!
//! Builds and sends the job-creation request for a given job kind and turns
//! the provider's acknowledgement into a [`JobHandle`]. No retries happen
//! here; failures go straight back to the orchestrator, which decides what
//! the caller sees.

use lullaby_client::InferenceClient;
use lullaby_core::domain::job::{JobHandle, JobKind, JobRequest};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while submitting a job
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Request failed local validation before any network call
    #[error("invalid job request: {0}")]
    InvalidRequest(String),

    /// Provider rejected the submission or the call itself failed
    #[error("submission rejected: {0}")]
    Rejected(#[from] lullaby_client::ClientError),

    /// Provider accepted the call but returned no usable request id
    #[error("submission response carried no request id")]
    MissingRequestId,
}

/// Submits job requests to the provider
pub struct Submitter {
    client: Arc<InferenceClient>,
}

impl Submitter {
    pub fn new(client: Arc<InferenceClient>) -> Self {
        Self { client }
    }

    /// Submit a job and return its handle
    ///
    /// Exactly one outbound call. A handle is only ever returned with a
    /// non-empty `request_id`.
    pub async fn submit(&self, request: &JobRequest) -> Result<JobHandle, SubmitError> {
        validate(request)?;

        let response = self
            .client
            .submit_job(&request.model_id, &request.parameters)
            .await?;

        match response.request_id {
            Some(id) if !id.is_empty() => {
                tracing::info!(request_id = %id, kind = ?request.kind, "job submitted");
                Ok(JobHandle::new(id))
            }
            _ => Err(SubmitError::MissingRequestId),
        }
    }
}

/// Checks the provider-mandated keys for each job kind
fn validate(request: &JobRequest) -> Result<(), SubmitError> {
    if request.model_id.is_empty() {
        return Err(SubmitError::InvalidRequest(
            "model_id cannot be empty".to_string(),
        ));
    }

    match request.kind {
        JobKind::Narration => {
            let text = request
                .parameters
                .get("text")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            if text.trim().is_empty() {
                return Err(SubmitError::InvalidRequest(
                    "narration requires non-empty text".to_string(),
                ));
            }
        }
        JobKind::SoundEffect => {
            let seconds = request
                .parameters
                .get("seconds_total")
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            if seconds <= 0.0 {
                return Err(SubmitError::InvalidRequest(
                    "sound effect requires a positive duration".to_string(),
                ));
            }
        }
    }

    Ok(())
}
