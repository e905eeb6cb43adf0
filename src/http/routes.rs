use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Live transcription channel
        .route(
            "/ws/transcribe/:transcription_id",
            get(handlers::transcribe),
        )
        // Session queries
        .route("/sessions/:session_id", get(handlers::session_status))
        // Request logging
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
