//! Story Service
//!
//! Prompt assembly and chat-completion calls for story and music text.

use lullaby_client::{ChatMessage, Result};

use crate::service::prompts;
use crate::state::AppState;

/// Generate a bedtime story
///
/// The system prompt and the user-prompt framing are selected per language;
/// anything other than Hindi falls back to English.
pub async fn generate_story(state: &AppState, prompt: &str, language: &str) -> Result<String> {
    let (system, user) = match language {
        "hi" => (
            prompts::STORY_SYSTEM_HI,
            format!("कृपया इस विषय पर सोने से पहले की एक छोटी कहानी सुनाइए: {}", prompt),
        ),
        _ => (
            prompts::STORY_SYSTEM_EN,
            format!("Please create a short bedtime story about: {}", prompt),
        ),
    };

    let messages = [ChatMessage::system(system), ChatMessage::user(user)];

    state
        .client
        .chat_completion(&state.config.story_model, &messages, 1000, 0.8)
        .await
}

/// Suggest a one-line background-music description for a story
pub async fn suggest_music(state: &AppState, story: &str) -> Result<String> {
    let messages = [
        ChatMessage::system(prompts::MUSIC_DIRECTOR_SYSTEM),
        ChatMessage::user(format!(
            "Suggest background music for this children's story:\n\n{}",
            story
        )),
    ];

    let text = state
        .client
        .chat_completion(&state.config.story_model, &messages, 100, 0.7)
        .await?;

    Ok(text.trim().to_string())
}
