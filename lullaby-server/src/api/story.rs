//! Story API Handlers
//!
//! Synchronous text generation: the bedtime story itself and a matching
//! background-music description. Single request/response calls, no job
//! lifecycle.

use axum::{Json, extract::State};
use lullaby_core::dto::story::{CreateStory, MusicPrompt, StoryText, SuggestMusic};

use crate::api::error::{ApiError, ApiResult};
use crate::service::story;
use crate::state::AppState;

/// POST /story/generate
/// Generate a bedtime story for a prompt and language
pub async fn generate_story(
    State(state): State<AppState>,
    Json(req): Json<CreateStory>,
) -> ApiResult<Json<StoryText>> {
    if req.prompt.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Please provide a story idea!".to_string(),
        ));
    }

    tracing::info!(language = %req.language, "generating story");

    let story = story::generate_story(&state, &req.prompt, &req.language)
        .await
        .map_err(|e| ApiError::Upstream(format!("Story generation failed: {}", e)))?;

    Ok(Json(StoryText { story }))
}

/// POST /story/music-prompt
/// Suggest background music matching a story
pub async fn suggest_music(
    State(state): State<AppState>,
    Json(req): Json<SuggestMusic>,
) -> ApiResult<Json<MusicPrompt>> {
    if req.story.trim().is_empty() {
        return Err(ApiError::BadRequest("No story provided".to_string()));
    }

    let prompt = story::suggest_music(&state, &req.story)
        .await
        .map_err(|e| ApiError::Upstream(format!("Music prompt generation failed: {}", e)))?;

    Ok(Json(MusicPrompt { prompt }))
}
