//! Job orchestration
//!
//! Composition root for the async job layer: submit, poll to a terminal
//! state, fetch and extract the artifact. Callers get either a
//! [`JobArtifact`] or exactly one [`JobError`] kind; nothing propagates raw.
//!
//! The same machinery backs two surfaces: the composed [`Orchestrator::run`]
//! that blocks until the job is done, and the decomposed
//! submit/status/fetch_result entry points the serving layer exposes as
//! separate endpoints.

use lullaby_client::InferenceClient;
use lullaby_core::domain::job::{JobArtifact, JobError, JobHandle, JobRequest};
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::extract::extract_artifact_url;
use crate::poll::{PollBudget, PollError, Poller, TerminalStatus};
use crate::submit::Submitter;

/// Runs generative jobs against the inference provider
///
/// Holds no per-job state; concurrent `run` calls are independent and share
/// only the pooled HTTP transport. No concurrency cap is imposed here —
/// callers wanting backpressure bound it externally.
pub struct Orchestrator {
    client: Arc<InferenceClient>,
    submitter: Submitter,
    poller: Poller,
}

impl Orchestrator {
    /// Create an orchestrator with its own provider client
    pub fn new(config: &EngineConfig) -> Self {
        let client = Arc::new(InferenceClient::new(&config.base_url, &config.api_key));
        Self::with_client(client, config)
    }

    /// Create an orchestrator around an existing provider client
    pub fn with_client(client: Arc<InferenceClient>, config: &EngineConfig) -> Self {
        let budget = PollBudget {
            interval: config.poll_interval,
            max_attempts: config.max_poll_attempts,
            network_error_threshold: config.network_error_threshold,
        };

        Self {
            submitter: Submitter::new(Arc::clone(&client)),
            poller: Poller::new(Arc::clone(&client), budget),
            client,
        }
    }

    /// The provider client, shared with callers that make their own calls
    pub fn client(&self) -> Arc<InferenceClient> {
        Arc::clone(&self.client)
    }

    /// Run a job to completion: submit, poll, extract
    pub async fn run(&self, request: JobRequest) -> Result<JobArtifact, JobError> {
        let handle = self.submit(request).await?;

        match self.poller.poll_until_terminal(&handle).await {
            Ok(TerminalStatus::Completed) => self.fetch_result(&handle.request_id).await,
            Ok(TerminalStatus::Failed { message }) => Err(JobError::JobFailed(message)),
            Ok(TerminalStatus::TimedOut { attempts }) => Err(JobError::JobTimedOut { attempts }),
            Err(err @ PollError::Unavailable { .. }) => {
                Err(JobError::PollingUnavailable(err.to_string()))
            }
        }
    }

    /// Submit without waiting (decomposed surface)
    pub async fn submit(&self, request: JobRequest) -> Result<JobHandle, JobError> {
        self.submitter
            .submit(&request)
            .await
            .map_err(|e| JobError::SubmissionFailed(e.to_string()))
    }

    /// One status check for a previously issued handle (decomposed surface)
    pub async fn status(&self, request_id: &str) -> Result<String, JobError> {
        self.client
            .job_status(request_id)
            .await
            .map(|report| report.status)
            .map_err(|e| JobError::PollingUnavailable(e.to_string()))
    }

    /// Fetch and extract the artifact of a completed job (decomposed surface)
    ///
    /// Invoked at most once per job, and only on a completed body.
    pub async fn fetch_result(&self, request_id: &str) -> Result<JobArtifact, JobError> {
        let body = self
            .client
            .job_result(request_id)
            .await
            .map_err(|e| JobError::PollingUnavailable(e.to_string()))?;

        let url = extract_artifact_url(&body).ok_or(JobError::ResultMalformed)?;

        tracing::info!(request_id, url, "job artifact resolved");

        Ok(JobArtifact {
            request_id: request_id.to_string(),
            url: url.to_string(),
        })
    }
}
