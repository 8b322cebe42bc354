//! API Module
//!
//! HTTP API layer for the story backend.
//! Each submodule handles endpoints for a specific domain.

pub mod error;
pub mod health;
pub mod job;
pub mod story;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Story endpoints (synchronous text generation)
        .route("/story/generate", post(story::generate_story))
        .route("/story/music-prompt", post(story::suggest_music))
        // Audio job endpoints: decomposed submit/status/result...
        .route("/audio/narration", post(job::submit_narration))
        .route("/audio/sound", post(job::submit_sound))
        .route("/audio/{id}/status", get(job::job_status))
        .route("/audio/{id}/result", get(job::job_result))
        // ...and composed run-to-completion
        .route("/audio/narration/run", post(job::run_narration))
        .route("/audio/sound/run", post(job::run_sound))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
