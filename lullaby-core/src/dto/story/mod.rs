//! Story DTOs

use serde::{Deserialize, Serialize};

/// Request to generate a bedtime story
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStory {
    pub prompt: String,
    #[serde(default = "default_language")]
    pub language: String,
}

/// Generated story text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryText {
    pub story: String,
}

/// Request to suggest background music for a story
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestMusic {
    pub story: String,
}

/// One-line music description suitable for a text-to-audio model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicPrompt {
    pub prompt: String,
}

fn default_language() -> String {
    "en".to_string()
}
