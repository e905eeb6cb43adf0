//! Storage collaborator adapters
//!
//! The collaborator owns transcription records and their segments; this
//! service only creates segments for finalized recognition results.
//! Deleting a transcription (an administrative action outside this
//! service) is defined to also remove its segments.

pub mod http;
pub mod memory;
pub mod types;
mod writer;

pub use http::HttpStore;
pub use memory::MemoryStore;
pub use types::{Transcription, TranscriptSegment};
pub use writer::SegmentWriter;

use crate::error::StoreError;
use async_trait::async_trait;

/// Contract of the external storage collaborator.
#[async_trait]
pub trait TranscriptionStore: Send + Sync {
    async fn create_transcription(&self, title: &str) -> Result<Transcription, StoreError>;

    async fn list_transcriptions(&self) -> Result<Vec<Transcription>, StoreError>;

    /// Fails with `StoreError::NotFound` for unknown ids.
    async fn get_transcription(&self, id: &str) -> Result<Transcription, StoreError>;

    /// Segments ordered by start time ascending.
    async fn list_segments(
        &self,
        transcription_id: &str,
    ) -> Result<Vec<TranscriptSegment>, StoreError>;

    async fn append_segment(
        &self,
        transcription_id: &str,
        segment: TranscriptSegment,
    ) -> Result<(), StoreError>;
}
