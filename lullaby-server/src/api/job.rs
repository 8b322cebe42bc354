//! Audio Job API Handlers
//!
//! HTTP endpoints for the asynchronous audio jobs. The decomposed
//! submit/status/result endpoints let the front-end drive the lifecycle
//! itself (and keep the user informed); the run endpoints block until the
//! job is done.

use axum::{
    Json,
    extract::{Path, State},
};
use lullaby_core::domain::job::JobRequest;
use lullaby_core::dto::job::{
    ArtifactLocation, CompletedRun, CreateNarration, CreateSoundEffect, JobStatusReport,
    JobSubmitted,
};

use crate::api::error::{ApiError, ApiResult};
use crate::state::AppState;

// =============================================================================
// Decomposed lifecycle endpoints
// =============================================================================

/// POST /audio/narration
/// Submit a narration job, returning its request id immediately
pub async fn submit_narration(
    State(state): State<AppState>,
    Json(req): Json<CreateNarration>,
) -> ApiResult<Json<JobSubmitted>> {
    if req.text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "No text provided for narration".to_string(),
        ));
    }

    tracing::info!(voice = %req.voice, language = %req.language, "submitting narration job");

    let request = JobRequest::narration(
        &state.config.narration_model,
        req.text,
        req.voice,
        req.language,
    );
    let handle = state.orchestrator.submit(request).await?;

    Ok(Json(JobSubmitted::new(handle.request_id)))
}

/// POST /audio/sound
/// Submit a background-sound job, returning its request id immediately
pub async fn submit_sound(
    State(state): State<AppState>,
    Json(req): Json<CreateSoundEffect>,
) -> ApiResult<Json<JobSubmitted>> {
    if req.prompt.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "No prompt provided for sound generation".to_string(),
        ));
    }

    tracing::info!(duration = req.duration, "submitting sound job");

    let request = JobRequest::sound_effect(&state.config.sound_model, req.prompt, req.duration);
    let handle = state.orchestrator.submit(request).await?;

    Ok(Json(JobSubmitted::new(handle.request_id)))
}

/// GET /audio/{id}/status
/// Pass the provider's job status through to the caller
pub async fn job_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<JobStatusReport>> {
    let status = state.orchestrator.status(&id).await?;
    Ok(Json(JobStatusReport { status }))
}

/// GET /audio/{id}/result
/// Fetch the artifact URL of a completed job
pub async fn job_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ArtifactLocation>> {
    let artifact = state.orchestrator.fetch_result(&id).await?;
    Ok(Json(ArtifactLocation {
        audio_url: artifact.url,
    }))
}

// =============================================================================
// Composed run-to-completion endpoints
// =============================================================================

/// POST /audio/narration/run
/// Submit a narration job and block until its artifact is available
pub async fn run_narration(
    State(state): State<AppState>,
    Json(req): Json<CreateNarration>,
) -> ApiResult<Json<CompletedRun>> {
    if req.text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "No text provided for narration".to_string(),
        ));
    }

    let request = JobRequest::narration(
        &state.config.narration_model,
        req.text,
        req.voice,
        req.language,
    );
    let artifact = state.orchestrator.run(request).await?;

    Ok(Json(CompletedRun {
        request_id: artifact.request_id,
        audio_url: artifact.url,
    }))
}

/// POST /audio/sound/run
/// Submit a background-sound job and block until its artifact is available
pub async fn run_sound(
    State(state): State<AppState>,
    Json(req): Json<CreateSoundEffect>,
) -> ApiResult<Json<CompletedRun>> {
    if req.prompt.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "No prompt provided for sound generation".to_string(),
        ));
    }

    let request = JobRequest::sound_effect(&state.config.sound_model, req.prompt, req.duration);
    let artifact = state.orchestrator.run(request).await?;

    Ok(Json(CompletedRun {
        request_id: artifact.request_id,
        audio_url: artifact.url,
    }))
}
