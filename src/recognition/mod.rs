//! Adapter to the external streaming recognition provider
//!
//! The volatile third-party wire protocol stays behind the narrow
//! `RecognitionClient` seam so the session core can be exercised with a
//! fake provider. Events come back as one ordered sequence; ordering
//! matches provider emission order and governs transcript chronology.

mod client;
mod config;
mod deepgram;
pub mod wire;

pub use client::{
    RecognitionClient, RecognitionEvent, RecognitionHandle, RecognitionSink, TranscriptResult,
    TranscriptWord,
};
pub use config::RecognitionOptions;
pub use deepgram::DeepgramClient;
