//! HTTP server hosting the live transcription channel
//!
//! - GET /ws/transcribe/:transcription_id - WebSocket session (binary
//!   frames in: raw audio; JSON frames out: transcript events)
//! - GET /sessions/:session_id - Live session status
//! - GET /health - Health check
//!
//! REST access to stored transcriptions and segments belongs to the
//! storage collaborator, not to this service.

mod handlers;
mod routes;
mod state;
mod ws;

pub use routes::create_router;
pub use state::AppState;
pub use ws::{split_socket, WsClientSink, WsClientSource};
