use serde::{Deserialize, Serialize};

/// Streaming options forwarded to the recognition provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionOptions {
    /// Provider model identifier (e.g. "nova-2")
    pub model: String,

    /// Language code (e.g. "en")
    pub language: String,

    /// Ask the provider to punctuate transcripts
    pub punctuate: bool,

    /// Emit interim results while speech is still in flight
    pub interim_results: bool,

    /// Attribute words to distinct speakers
    pub diarize: bool,
}

impl Default for RecognitionOptions {
    fn default() -> Self {
        Self {
            model: "nova-2".to_string(),
            language: "en".to_string(),
            punctuate: true,
            interim_results: true,
            diarize: true,
        }
    }
}
