//! Chat completion endpoint
//!
//! Synchronous text generation for story and music-prompt content. One
//! request, one response; no job lifecycle involved.

use crate::InferenceClient;
use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const CHAT_TIMEOUT: Duration = Duration::from_secs(60);

/// One message in a chat completion exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl InferenceClient {
    /// Run a chat completion and return the first choice's content
    ///
    /// # Arguments
    /// * `model` - Chat model identifier
    /// * `messages` - System/user message list
    /// * `max_tokens` - Completion length cap
    /// * `temperature` - Sampling temperature
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url());
        tracing::debug!(model, "requesting chat completion");

        let response = self
            .http()
            .post(&url)
            .bearer_auth(self.api_key())
            .timeout(CHAT_TIMEOUT)
            .json(&ChatRequest {
                model,
                messages,
                max_tokens,
                temperature,
            })
            .send()
            .await?;

        let body: ChatResponse = self.handle_response(response).await?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ClientError::ParseError("chat completion returned no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let system = ChatMessage::system("You are a storyteller.");
        assert_eq!(system.role, "system");

        let user = ChatMessage::user("Tell me about a brave rabbit.");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "Tell me about a brave rabbit.");
    }

    #[test]
    fn test_chat_response_parsing() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"Once upon a time..."}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Once upon a time...");
    }
}
