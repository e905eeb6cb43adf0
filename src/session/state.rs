use serde::Serialize;

/// Lifecycle of a live transcription session.
///
/// `Closed` and `Failed` are terminal: a session never re-enters
/// `Streaming`, a new one must be created instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Registering the identifier and opening the provider stream
    Connecting,
    /// Relaying audio and transcript events
    Streaming,
    /// Releasing the provider stream and registry entry
    Closing,
    /// Ended normally
    Closed,
    /// Ended on a fatal fault
    Failed,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Closed | SessionState::Failed)
    }
}
