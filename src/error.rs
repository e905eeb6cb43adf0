use thiserror::Error;

/// Errors from the streaming recognition provider adapter.
#[derive(Debug, Error)]
pub enum RecognitionError {
    /// Provider unreachable, or it rejected the connection attempt.
    #[error("failed to connect to recognition provider: {0}")]
    Connection(String),

    /// Mid-stream transport failure while forwarding audio.
    #[error("failed to send audio to recognition provider: {0}")]
    Send(String),

    /// The provider reported a decoding or runtime fault.
    #[error("recognition provider error: {0}")]
    Provider(String),
}

/// Errors from the storage collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transcription {0} not found")]
    NotFound(String),

    #[error("storage request failed: {0}")]
    Request(String),

    #[error("storage returned status {0}")]
    Status(u16),
}

/// Session-level failures. Each fatal variant is reported to the client
/// exactly once before the channel closes.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown transcription: {0}")]
    InvalidSession(String),

    #[error("a session for {0} is already active")]
    DuplicateSession(String),

    #[error(transparent)]
    Recognition(#[from] RecognitionError),

    #[error(transparent)]
    Persistence(#[from] StoreError),
}
