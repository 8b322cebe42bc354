//! Configuration module
//!
//! Handles CLI configuration including provider credentials.

use lullaby_engine::EngineConfig;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Inference provider API key
    pub api_key: String,
    /// Inference provider base URL
    pub base_url: String,
}

impl Config {
    /// Engine configuration with this CLI's provider settings applied
    pub fn engine(&self) -> EngineConfig {
        let mut config = EngineConfig::new(self.api_key.clone());
        config.base_url = self.base_url.clone();
        config
    }
}
