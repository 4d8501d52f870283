use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::server::{
    handlers::{
        chat::send_message,
        pages::{chat_page, health_check},
    },
    services::{ollama::OllamaService, transcript::TranscriptLog, triage::TriageService},
};

/// Runtime configuration. The defaults are the served behavior; there are
/// deliberately no CLI flags or environment lookups behind these fields.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub model: String,
    pub ollama_url: String,
    pub log_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 7870,
            model: "mia:latest".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            log_path: PathBuf::from("logs/queries.log"),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub triage: Arc<TriageService>,
}

pub fn configure_app(config: &AppConfig) -> Router {
    // Create shared services
    let ollama = OllamaService::with_config(&config.ollama_url, &config.model);
    let transcript = TranscriptLog::new(config.log_path.clone());

    // One-time setup: the transcript directory must exist before serving.
    transcript
        .ensure_dir()
        .expect("transcript directory must be creatable");

    let triage = Arc::new(TriageService::new(ollama, transcript));

    app_router(AppState { triage })
}

async fn log_request(request: Request, next: Next) -> Response {
    info!("{} {}", request.method(), request.uri().path());
    next.run(request).await
}

fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(chat_page))
        .route("/health", get(health_check))
        .route("/api/chat", post(send_message))
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
