//! Lullaby Inference Client
//!
//! A simple, type-safe HTTP client for the third-party inference provider.
//!
//! The provider exposes two families of endpoints consumed here:
//! - `POST /chat/completions` — synchronous text generation (stories,
//!   music prompts), one request in, one response out.
//! - `POST /async-invoke` + `GET /async-invoke/{id}[/status]` — long-running
//!   generative jobs (narration, sound) observed through polling.
//!
//! Every call carries the bearer token handed to the constructor; per-call
//! timeouts match the provider's latency profile (short for status checks,
//! longer for transfer-bearing calls).
//!
//! # Example
//!
//! ```no_run
//! use lullaby_client::InferenceClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lullaby_client::ClientError> {
//!     let client = InferenceClient::new("https://inference.do-ai.run/v1", "token");
//!     let status = client.job_status("req-123").await?;
//!     println!("job status: {}", status.status);
//!     Ok(())
//! }
//! ```

pub mod error;

mod chat;
mod invoke;

// Re-export commonly used types
pub use chat::ChatMessage;
pub use error::{ClientError, Result};
pub use invoke::{JobStatusResponse, SubmitJobResponse};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the inference provider API
///
/// Cheap to clone; the underlying connection pool is shared across clones
/// and carries no job-specific state.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    /// Base URL of the provider (e.g., "https://inference.do-ai.run/v1")
    base_url: String,
    /// Bearer token supplied out-of-band
    api_key: String,
    /// HTTP client instance
    client: Client,
}

impl InferenceClient {
    /// Create a new provider client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the provider API
    /// * `api_key` - The bearer token used on every request
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: Client::new(),
        }
    }

    /// Create a new provider client with a custom HTTP client
    ///
    /// This allows you to configure proxies, TLS settings, default
    /// timeouts, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Get the base URL of the provider
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the request
    /// failed, or deserializes the response body if successful.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
