//! Router assembly: HTTP endpoints, WebSocket upgrade, static files, CORS, and HTTP tracing.

use std::{path::Path, sync::Arc};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod ws;

/// Build the application router with:
/// - WebSocket at `/ws`
/// - JSON API under `/api/v1/...`, one group per section
/// - Upload routes with their own body limit
/// - Static SPA from `static_dir` with index fallback
/// - CORS (allow any origin/method/headers)
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();
    let static_service = ServeDir::new(&static_dir)
        .append_index_html_on_directories(true)
        .not_found_service(ServeFile::new(Path::new(&static_dir).join("index.html")));

    let uploads = Router::new()
        .route("/api/v1/convert/preview", post(http::http_post_convert_preview))
        .route("/api/v1/convert", post(http::http_post_convert))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(state.config.max_upload_bytes));

    Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // Navigation + Home
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/sections", get(http::http_get_sections))
        .route("/api/v1/home", get(http::http_get_home))
        // Daily Challenge
        .route("/api/v1/challenge", get(http::http_get_challenge))
        .route("/api/v1/challenge/response", post(http::http_post_challenge_response))
        .route("/api/v1/challenge/responses", get(http::http_get_challenge_responses))
        // Interactive Quiz
        .route("/api/v1/quiz", get(http::http_get_quiz))
        .route("/api/v1/quiz/submit", post(http::http_post_quiz))
        // Journal & Reflections
        .route("/api/v1/journal", get(http::http_get_journal).post(http::http_post_journal))
        // Growth Tracker
        .route("/api/v1/growth", get(http::http_get_growth))
        .route("/api/v1/growth/snapshot", post(http::http_post_growth))
        // File Converter
        .merge(uploads)
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Frontend fallback
        .fallback_service(static_service)
}
