use super::state::SessionState;
use crate::error::SessionError;
use crate::protocol::ClientMessage;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::{mpsc, watch, RwLock};
use tracing::info;

/// Handle to a live session, exposed through the registry for lookups
/// and broadcast.
#[derive(Clone)]
pub struct SessionHandle {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    state: watch::Receiver<SessionState>,
    outbound: mpsc::Sender<ClientMessage>,
}

impl SessionHandle {
    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    /// Queue a message for delivery on the session's client channel.
    pub async fn send(&self, message: ClientMessage) -> bool {
        self.outbound.send(message).await.is_ok()
    }
}

/// Point-in-time view of a session, served by the status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub state: SessionState,
    pub started_at: DateTime<Utc>,
}

/// Process-wide table of active sessions (session id -> handle).
///
/// `register` is an atomic check-and-insert: at most one active session
/// exists per identifier, and an identifier becomes reusable only once
/// `deregister` has run.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(
        &self,
        session_id: &str,
        state: watch::Receiver<SessionState>,
        outbound: mpsc::Sender<ClientMessage>,
    ) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(session_id) {
            return Err(SessionError::DuplicateSession(session_id.to_string()));
        }
        sessions.insert(
            session_id.to_string(),
            SessionHandle {
                session_id: session_id.to_string(),
                started_at: Utc::now(),
                state,
                outbound,
            },
        );
        info!("Registered session {}", session_id);
        Ok(())
    }

    pub async fn deregister(&self, session_id: &str) {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(session_id).is_some() {
            info!("Deregistered session {}", session_id);
        }
    }

    pub async fn get(&self, session_id: &str) -> Option<SessionHandle> {
        self.sessions.read().await.get(session_id).cloned()
    }

    pub async fn snapshot(&self, session_id: &str) -> Option<SessionSnapshot> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).map(|handle| SessionSnapshot {
            session_id: handle.session_id.clone(),
            state: handle.state(),
            started_at: handle.started_at,
        })
    }

    /// Send a message to a session's client, if that session is active.
    pub async fn send_to(&self, session_id: &str, message: ClientMessage) -> bool {
        let handle = self.get(session_id).await;
        match handle {
            Some(handle) => handle.send(message).await,
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
