use super::state::AppState;
use super::ws;
use crate::session::SessionManager;
use axum::{
    extract::ws::WebSocketUpgrade,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /ws/transcribe/:transcription_id
/// Upgrade to a live transcription session.
pub async fn transcribe(
    State(state): State<AppState>,
    Path(transcription_id): Path<String>,
    upgrade: WebSocketUpgrade,
) -> impl IntoResponse {
    info!("Client connecting for transcription {}", transcription_id);

    upgrade.on_upgrade(move |socket| async move {
        let manager = SessionManager::new(
            transcription_id,
            state.session_config.clone(),
            Arc::clone(&state.registry),
            Arc::clone(&state.recognition),
            Arc::clone(&state.store),
        );
        let (source, sink) = ws::split_socket(socket);
        manager.run(source, sink).await;
    })
}

/// GET /sessions/:session_id
/// Status of a live session.
pub async fn session_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match state.registry.snapshot(&session_id).await {
        Some(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Session {} not found", session_id),
            }),
        )
            .into_response(),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
