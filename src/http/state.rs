use crate::recognition::RecognitionClient;
use crate::session::{SessionConfig, SessionRegistry};
use crate::store::TranscriptionStore;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Active sessions (session id -> handle)
    pub registry: Arc<SessionRegistry>,

    /// Recognition provider adapter
    pub recognition: Arc<dyn RecognitionClient>,

    /// Storage collaborator adapter
    pub store: Arc<dyn TranscriptionStore>,

    /// Per-session configuration template
    pub session_config: SessionConfig,
}
