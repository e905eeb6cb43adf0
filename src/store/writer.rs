use super::types::TranscriptSegment;
use super::TranscriptionStore;
use crate::error::StoreError;
use std::sync::Arc;
use tracing::{debug, info};

/// Write side of segment persistence for one session.
///
/// Empty-text appends are skipped outright. Storage failures surface to
/// the caller, which reports them as non-fatal warnings; they never end
/// the session.
#[derive(Clone)]
pub struct SegmentWriter {
    store: Arc<dyn TranscriptionStore>,
    transcription_id: String,
}

impl SegmentWriter {
    pub fn new(store: Arc<dyn TranscriptionStore>, transcription_id: String) -> Self {
        Self {
            store,
            transcription_id,
        }
    }

    /// Persist one finalized segment. Returns Ok(false) for the
    /// empty-text no-op, Ok(true) when a segment was written.
    pub async fn append(&self, segment: TranscriptSegment) -> Result<bool, StoreError> {
        if segment.text.is_empty() {
            debug!("Skipping empty segment for {}", self.transcription_id);
            return Ok(false);
        }

        self.store
            .append_segment(&self.transcription_id, segment.clone())
            .await?;

        let preview: String = segment.text.chars().take(50).collect();
        info!(
            "Saved segment for {}: speaker={:?}, text='{}'",
            self.transcription_id, segment.speaker, preview
        );
        Ok(true)
    }
}
