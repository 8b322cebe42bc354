//! Status polling
//!
//! Repeatedly queries job status until the provider reports a terminal
//! state or the attempt budget runs out. Each attempt is a fresh network
//! call; a transport error on one attempt consumes budget without aborting
//! the loop, but too many in a row escalate to [`PollError::Unavailable`].

use lullaby_client::{ClientError, InferenceClient};
use lullaby_core::domain::job::{JobHandle, JobState};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Bounded poll budget: `max_attempts × interval` caps the total wait.
#[derive(Debug, Clone, Copy)]
pub struct PollBudget {
    /// Fixed delay between successive status checks
    pub interval: Duration,
    /// Attempts before the loop gives up with a timeout
    pub max_attempts: u32,
    /// Consecutive transport errors tolerated; the error after this many
    /// escalates
    pub network_error_threshold: u32,
}

/// Terminal outcome of a poll loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalStatus {
    Completed,
    /// Provider declared the job broken
    Failed { message: String },
    /// Budget exhausted while the provider still reported in-progress.
    /// Local decision; the remote job may yet complete, its result is then
    /// unreachable through this handle.
    TimedOut { attempts: u32 },
}

/// Polling infrastructure failure, distinct from a provider-reported one
#[derive(Debug, Error)]
pub enum PollError {
    #[error("status endpoint unreachable after {consecutive} consecutive attempts: {source}")]
    Unavailable {
        consecutive: u32,
        source: ClientError,
    },
}

/// Drives a job handle to a terminal state
pub struct Poller {
    client: Arc<InferenceClient>,
    budget: PollBudget,
}

impl Poller {
    pub fn new(client: Arc<InferenceClient>, budget: PollBudget) -> Self {
        Self { client, budget }
    }

    /// Poll until terminal or out of budget
    ///
    /// Status strings outside the known vocabulary count as still pending;
    /// the consecutive-error counter resets on any successful status fetch.
    pub async fn poll_until_terminal(
        &self,
        handle: &JobHandle,
    ) -> Result<TerminalStatus, PollError> {
        let mut consecutive_errors: u32 = 0;

        for attempt in 1..=self.budget.max_attempts {
            match self.client.job_status(&handle.request_id).await {
                Ok(report) => {
                    consecutive_errors = 0;

                    match JobState::from_provider_status(&report.status) {
                        JobState::Completed => {
                            tracing::info!(
                                request_id = %handle.request_id,
                                attempt,
                                "job completed"
                            );
                            return Ok(TerminalStatus::Completed);
                        }
                        JobState::Failed => {
                            let message = report
                                .error
                                .unwrap_or_else(|| format!("provider status {}", report.status));
                            tracing::info!(
                                request_id = %handle.request_id,
                                attempt,
                                "job failed provider-side"
                            );
                            return Ok(TerminalStatus::Failed { message });
                        }
                        _ => {
                            tracing::debug!(
                                request_id = %handle.request_id,
                                attempt,
                                status = %report.status,
                                "job still pending"
                            );
                        }
                    }
                }
                Err(err) => {
                    consecutive_errors += 1;

                    if consecutive_errors > self.budget.network_error_threshold {
                        tracing::error!(
                            request_id = %handle.request_id,
                            consecutive_errors,
                            "status polling unavailable: {}",
                            err
                        );
                        return Err(PollError::Unavailable {
                            consecutive: consecutive_errors,
                            source: err,
                        });
                    }

                    // Wasted attempt: consumes budget, does not advance state.
                    tracing::warn!(
                        request_id = %handle.request_id,
                        attempt,
                        consecutive_errors,
                        "status check failed: {}",
                        err
                    );
                }
            }

            if attempt < self.budget.max_attempts {
                tokio::time::sleep(self.budget.interval).await;
            }
        }

        tracing::warn!(
            request_id = %handle.request_id,
            attempts = self.budget.max_attempts,
            "poll budget exhausted"
        );

        Ok(TerminalStatus::TimedOut {
            attempts: self.budget.max_attempts,
        })
    }
}
