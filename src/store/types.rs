use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A transcription record owned by the storage collaborator.
///
/// Created once per session, immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// One finalized transcript segment belonging to a transcription.
///
/// Created only for recognition results marked final or speech-final;
/// never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,

    /// Diarized speaker label ("speaker_0"), if available
    pub speaker: Option<String>,

    /// Start offset in seconds, >= 0
    pub start_time: f64,

    /// End offset in seconds, >= start_time
    pub end_time: f64,

    pub is_final: bool,
}
