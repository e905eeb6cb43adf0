pub mod config;
pub mod error;
pub mod http;
pub mod protocol;
pub mod recognition;
pub mod session;
pub mod store;

pub use config::Config;
pub use error::{RecognitionError, SessionError, StoreError};
pub use http::{create_router, AppState};
pub use protocol::{ClientMessage, EventNotice, SegmentPayload};
pub use recognition::{
    DeepgramClient, RecognitionClient, RecognitionEvent, RecognitionHandle, RecognitionOptions,
    RecognitionSink, TranscriptResult, TranscriptWord,
};
pub use session::{
    ClientFrame, ClientSink, ClientSource, CloseCode, SessionConfig, SessionManager,
    SessionRegistry, SessionSnapshot, SessionState,
};
pub use store::{
    HttpStore, MemoryStore, SegmentWriter, Transcription, TranscriptSegment, TranscriptionStore,
};
