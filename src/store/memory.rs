use super::types::{Transcription, TranscriptSegment};
use super::TranscriptionStore;
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process store used by tests and local development.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    transcriptions: HashMap<String, Transcription>,
    segments: HashMap<String, Vec<TranscriptSegment>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a transcription under a caller-chosen id.
    pub async fn insert_transcription(&self, id: &str, title: &str) -> Transcription {
        let transcription = Transcription {
            id: id.to_string(),
            title: title.to_string(),
            created_at: Utc::now(),
        };
        let mut inner = self.inner.write().await;
        inner
            .transcriptions
            .insert(id.to_string(), transcription.clone());
        transcription
    }
}

#[async_trait]
impl TranscriptionStore for MemoryStore {
    async fn create_transcription(&self, title: &str) -> Result<Transcription, StoreError> {
        let transcription = Transcription {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            created_at: Utc::now(),
        };
        let mut inner = self.inner.write().await;
        inner
            .transcriptions
            .insert(transcription.id.clone(), transcription.clone());
        Ok(transcription)
    }

    async fn list_transcriptions(&self) -> Result<Vec<Transcription>, StoreError> {
        let inner = self.inner.read().await;
        let mut all: Vec<Transcription> = inner.transcriptions.values().cloned().collect();
        all.sort_by_key(|t| t.created_at);
        Ok(all)
    }

    async fn get_transcription(&self, id: &str) -> Result<Transcription, StoreError> {
        let inner = self.inner.read().await;
        inner
            .transcriptions
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn list_segments(
        &self,
        transcription_id: &str,
    ) -> Result<Vec<TranscriptSegment>, StoreError> {
        let inner = self.inner.read().await;
        if !inner.transcriptions.contains_key(transcription_id) {
            return Err(StoreError::NotFound(transcription_id.to_string()));
        }
        let mut segments = inner
            .segments
            .get(transcription_id)
            .cloned()
            .unwrap_or_default();
        segments.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
        Ok(segments)
    }

    async fn append_segment(
        &self,
        transcription_id: &str,
        segment: TranscriptSegment,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.transcriptions.contains_key(transcription_id) {
            return Err(StoreError::NotFound(transcription_id.to_string()));
        }
        inner
            .segments
            .entry(transcription_id.to_string())
            .or_default()
            .push(segment);
        Ok(())
    }
}
