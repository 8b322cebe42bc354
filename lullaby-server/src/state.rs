//! Shared application state

use lullaby_client::InferenceClient;
use lullaby_engine::{EngineConfig, Orchestrator};
use std::sync::Arc;

/// State handed to every handler
///
/// Cheap to clone; all fields are shared. No per-request state lives here,
/// so concurrent jobs never contend on anything but the HTTP pool.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    pub client: Arc<InferenceClient>,
    pub config: Arc<EngineConfig>,
}

impl AppState {
    pub fn new(config: EngineConfig) -> Self {
        let orchestrator = Arc::new(Orchestrator::new(&config));
        let client = orchestrator.client();
        Self {
            orchestrator,
            client,
            config: Arc::new(config),
        }
    }
}
