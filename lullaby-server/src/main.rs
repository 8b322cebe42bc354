use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;
pub mod service;
pub mod state;

use lullaby_engine::EngineConfig;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lullaby_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Lullaby server...");

    // Provider configuration; a missing API key fails here, not per-request
    let config = EngineConfig::from_env().expect("Failed to load provider configuration");
    config.validate().expect("Invalid provider configuration");

    tracing::info!("Provider configured: {}", config.base_url);

    let state = state::AppState::new(config);

    // Build router with all API endpoints
    let app = api::create_router(state);

    // Get bind address
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
