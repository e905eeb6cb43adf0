use crate::recognition::RecognitionOptions;

/// Configuration for a live transcription session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Options forwarded to the recognition provider
    pub recognition: RecognitionOptions,

    /// Capacity of the registry broadcast inbox
    pub outbound_buffer: usize,

    /// Capacity of the client audio frame buffer
    pub frame_buffer: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            recognition: RecognitionOptions::default(),
            outbound_buffer: 64,
            frame_buffer: 32,
        }
    }
}
