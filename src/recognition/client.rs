use super::RecognitionOptions;
use crate::error::RecognitionError;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// One word of a decoded transcript, with its diarized speaker id when
/// the provider attributes one.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptWord {
    pub word: String,
    pub start: f64,
    pub end: f64,
    pub speaker: Option<u32>,
}

/// A decoded transcript result from the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptResult {
    pub text: String,

    /// Word-level detail; empty when diarization is disabled
    pub words: Vec<TranscriptWord>,

    /// Start offset of this result within the stream, in seconds
    pub start: f64,

    /// Audio duration covered by this result, in seconds
    pub duration: f64,

    /// Whether this result will not be revised further
    pub is_final: bool,

    /// Whether this result ends an utterance
    pub speech_final: bool,
}

/// Events pushed by the recognition provider, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    InterimTranscript(TranscriptResult),
    FinalTranscript(TranscriptResult),
    SpeechStarted { timestamp: f64 },
    UtteranceEnd { last_word_end: f64 },
    /// The provider reported a fatal fault; the stream is unusable
    ProviderError(String),
    /// The provider ended the stream; no further events follow
    ProviderClosed,
}

/// Write half of an open recognition session.
#[async_trait]
pub trait RecognitionSink: Send {
    /// Forward one raw audio chunk. May wait under backpressure; never
    /// drops or reorders chunks.
    async fn send_audio(&mut self, chunk: Vec<u8>) -> Result<(), RecognitionError>;

    /// Gracefully end the streaming session. Idempotent.
    async fn close(&mut self) -> Result<(), RecognitionError>;
}

/// An open streaming session with the provider.
pub struct RecognitionHandle {
    /// Audio write half
    pub sink: Box<dyn RecognitionSink>,

    /// Ordered provider events; the channel ends when the provider closes
    pub events: mpsc::Receiver<RecognitionEvent>,
}

/// Opens streaming sessions with the recognition provider.
#[async_trait]
pub trait RecognitionClient: Send + Sync {
    /// Establish a streaming session. Fails fast with no retry; the
    /// caller decides whether to retry or abort.
    async fn open(&self, opts: &RecognitionOptions)
        -> Result<RecognitionHandle, RecognitionError>;
}
