//! Asynchronous invocation endpoints
//!
//! Generative audio jobs are created with a single POST and then observed
//! through status checks and a final result fetch; the provider never blocks
//! on generation.

use crate::InferenceClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

// Submission and status checks are small JSON exchanges. The result fetch
// and artifact download can carry transfer-bearing payloads and get longer
// allowances.
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);
const STATUS_TIMEOUT: Duration = Duration::from_secs(10);
const RESULT_TIMEOUT: Duration = Duration::from_secs(30);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct AsyncInvokeRequest<'a> {
    model_id: &'a str,
    input: &'a HashMap<String, serde_json::Value>,
}

/// Response to a job submission
///
/// `request_id` is optional on the wire; the caller decides whether its
/// absence is an error.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitJobResponse {
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Response to a job status query
#[derive(Debug, Clone, Deserialize)]
pub struct JobStatusResponse {
    pub status: String,
    /// Failure detail, populated by some models on FAILED
    #[serde(default)]
    pub error: Option<String>,
}

impl InferenceClient {
    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Submit an asynchronous generative job
    ///
    /// # Arguments
    /// * `model_id` - Provider model identifier (e.g. a TTS model)
    /// * `input` - The model-specific input object, sent verbatim
    ///
    /// # Returns
    /// The provider's submission acknowledgement
    pub async fn submit_job(
        &self,
        model_id: &str,
        input: &HashMap<String, serde_json::Value>,
    ) -> Result<SubmitJobResponse> {
        let url = format!("{}/async-invoke", self.base_url());
        tracing::debug!(model_id, "submitting async job");

        let response = self
            .http()
            .post(&url)
            .bearer_auth(self.api_key())
            .timeout(SUBMIT_TIMEOUT)
            .json(&AsyncInvokeRequest { model_id, input })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Query the status of a submitted job
    ///
    /// # Arguments
    /// * `request_id` - The provider-assigned job identifier
    pub async fn job_status(&self, request_id: &str) -> Result<JobStatusResponse> {
        let url = format!("{}/async-invoke/{}/status", self.base_url(), request_id);

        let response = self
            .http()
            .get(&url)
            .bearer_auth(self.api_key())
            .timeout(STATUS_TIMEOUT)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Fetch the full result document of a job
    ///
    /// The body shape varies by model; it is returned as raw JSON for the
    /// caller to pick apart.
    pub async fn job_result(&self, request_id: &str) -> Result<serde_json::Value> {
        let url = format!("{}/async-invoke/{}", self.base_url(), request_id);

        let response = self
            .http()
            .get(&url)
            .bearer_auth(self.api_key())
            .timeout(RESULT_TIMEOUT)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Download a generated artifact
    ///
    /// Artifact URLs point at the provider's CDN and are not authenticated;
    /// the bytes are opaque to this crate.
    pub async fn download_artifact(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http()
            .get(url)
            .timeout(DOWNLOAD_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(crate::ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
