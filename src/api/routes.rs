use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::translate::TranslationService;
use crate::tts::SpeechService;

pub struct AppState {
    pub translator: TranslationService,
    pub speech: SpeechService,
    pub upstream_configured: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let gemini = GeminiClient::new(config);
        Self {
            upstream_configured: gemini.is_configured(),
            translator: TranslationService::new(gemini.clone(), config),
            speech: SpeechService::new(gemini, config),
        }
    }
}

pub fn create_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/translate", post(handlers::translate))
        .route("/tts", post(handlers::speak))
        .route("/voices", get(handlers::list_voices))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
