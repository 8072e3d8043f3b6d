//! FanWelcome - multilingual fan assistant for AFCON 2025
//!
//! Serves the chat widget backend: preset travel and safety answers in
//! English, French and Arabic, with free-text questions forwarded to Gemini.

mod api;
mod config;
mod faq;
mod i18n;
mod llm;
mod resolver;
mod runtime;
mod state_machine;
mod system_prompt;

use api::{create_router, AppState};
use config::AppConfig;
use resolver::AnswerResolver;
use runtime::{LlmClient, ServiceLlmClient, SessionManager};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fan_welcome=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = AppConfig::from_env();

    // Initialize LLM service
    let service = llm::service_from_config(&config.llm);
    if service.is_none() {
        tracing::warn!(
            "No LLM API key configured. Set GEMINI_API_KEY or LLM_GATEWAY; \
             free-text questions will get an apology."
        );
    }

    let llm_client: Arc<dyn LlmClient> = Arc::new(ServiceLlmClient::new(service));
    let resolver = Arc::new(AnswerResolver::new(llm_client, &config.llm));
    tracing::info!(model = %resolver.model_id(), "Answer resolver ready");

    // Create application state
    let sessions = Arc::new(SessionManager::new(
        resolver,
        config.preset_delay,
        config.session_idle_timeout,
    ));
    let state = AppState::new(sessions);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(cors)
        .layer(compression)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("FanWelcome server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
