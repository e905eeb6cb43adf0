//! Live transcription session management
//!
//! This module provides the `SessionManager` state machine that
//! coordinates one session's three flows (inbound client audio, inbound
//! provider events, outbound client messages) and the process-wide
//! `SessionRegistry` that enforces at most one active session per
//! identifier.

mod channel;
mod config;
mod manager;
mod registry;
mod state;

pub use channel::{ClientFrame, ClientSink, ClientSource, CloseCode};
pub use config::SessionConfig;
pub use manager::SessionManager;
pub use registry::{SessionHandle, SessionRegistry, SessionSnapshot};
pub use state::SessionState;
