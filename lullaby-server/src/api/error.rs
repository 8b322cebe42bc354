//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lullaby_core::domain::job::{JobError, JobErrorKind};
use lullaby_core::dto::job::JobFailure;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Caller sent an unusable request body
    BadRequest(String),
    /// The async job layer reported a terminal failure
    Job(JobError),
    /// A synchronous provider call (chat completion) failed
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
            ApiError::Upstream(msg) => {
                tracing::error!("Upstream error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(serde_json::json!({ "error": msg })),
                )
                    .into_response()
            }
            ApiError::Job(err) => {
                let status = match err.kind() {
                    JobErrorKind::SubmissionFailed
                    | JobErrorKind::JobFailed
                    | JobErrorKind::ResultMalformed => StatusCode::BAD_GATEWAY,
                    JobErrorKind::PollingUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                    JobErrorKind::JobTimedOut => StatusCode::GATEWAY_TIMEOUT,
                };

                tracing::error!("Job error ({:?}): {}", err.kind(), err);

                let body = JobFailure {
                    error_kind: err.kind(),
                    error: err.to_string(),
                };

                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<JobError> for ApiError {
    fn from(err: JobError) -> Self {
        ApiError::Job(err)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_job_error_status_codes() {
        assert_eq!(
            status_of(ApiError::Job(JobError::SubmissionFailed("x".into()))),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(ApiError::Job(JobError::JobFailed("x".into()))),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(ApiError::Job(JobError::JobTimedOut { attempts: 60 })),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            status_of(ApiError::Job(JobError::PollingUnavailable("x".into()))),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(ApiError::Job(JobError::ResultMalformed)),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_bad_request_status_code() {
        assert_eq!(
            status_of(ApiError::BadRequest("missing text".into())),
            StatusCode::BAD_REQUEST
        );
    }
}
