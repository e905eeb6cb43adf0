use serde::{Deserialize, Serialize};

/// Outbound client frame: `{"type": ..., "payload": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Session lifecycle notice (human-readable)
    Status(String),

    /// One decoded transcript segment, interim or final
    TranscriptSegment(SegmentPayload),

    /// Lightweight notification that carries no transcript text
    Event(EventNotice),

    /// Fault surfaced to the client (human-readable)
    Error(String),
}

/// Payload of a `transcript_segment` frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentPayload {
    pub text: String,

    /// Whether the provider marked this result final
    pub is_final: bool,

    /// Whether this result ends an utterance
    pub speech_final: bool,

    /// Diarized speaker label ("speaker_0"), if available
    pub speaker: Option<String>,

    /// Start offset in seconds from the beginning of the stream
    pub start: f64,

    /// End offset in seconds (start + duration)
    pub end: f64,
}

/// Payload of an `event` frame
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventNotice {
    SpeechStarted,
    UtteranceEnd,
    /// A finalized segment could not be saved; streaming continues
    PersistenceWarning { message: String },
}
