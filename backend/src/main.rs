//! Smart Irrigation Assistant - Backend Server
//!
//! Estimates daily irrigation and harvest dates from field conditions and
//! relays growers' questions to a generative AI service.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::{GeminiClient, TextGenerator};
use services::{AssistantService, SessionStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub assistant: AssistantService,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        let sessions = SessionStore::new(&config.sessions);
        Self {
            config: Arc::new(config),
            assistant: AssistantService::new(generator),
            sessions,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "irrigation_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Smart Irrigation Assistant Server");
    tracing::info!("Environment: {}", config.environment);

    let gemini = GeminiClient::from_config(&config.gemini)?;
    tracing::info!(
        "AI model: {} (timeout {}s)",
        config.gemini.model,
        config.gemini.timeout_secs
    );

    tracing::info!(
        "Chat sessions: idle timeout {}s, at most {}",
        config.sessions.idle_timeout_secs,
        config.sessions.max_sessions
    );

    // Create application state
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = AppState::new(config, Arc::new(gemini));

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Smart Irrigation Assistant API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
