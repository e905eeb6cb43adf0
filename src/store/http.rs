use super::types::{Transcription, TranscriptSegment};
use super::TranscriptionStore;
use crate::error::StoreError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::info;

/// REST adapter for the storage collaborator.
pub struct HttpStore {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct CreateTranscriptionRequest<'a> {
    title: &'a str,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Storage collaborator at {}", base_url);
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl TranscriptionStore for HttpStore {
    async fn create_transcription(&self, title: &str) -> Result<Transcription, StoreError> {
        let response = self
            .client
            .post(self.url("/transcriptions/"))
            .json(&CreateTranscriptionRequest { title })
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))
    }

    async fn list_transcriptions(&self) -> Result<Vec<Transcription>, StoreError> {
        let response = self
            .client
            .get(self.url("/transcriptions/"))
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))
    }

    async fn get_transcription(&self, id: &str) -> Result<Transcription, StoreError> {
        let response = self
            .client
            .get(self.url(&format!("/transcriptions/{}/", id)))
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))
    }

    async fn list_segments(
        &self,
        transcription_id: &str,
    ) -> Result<Vec<TranscriptSegment>, StoreError> {
        let response = self
            .client
            .get(self.url(&format!("/transcriptions/{}/segments/", transcription_id)))
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(transcription_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }
        response
            .json()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))
    }

    async fn append_segment(
        &self,
        transcription_id: &str,
        segment: TranscriptSegment,
    ) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.url(&format!("/transcriptions/{}/segments/", transcription_id)))
            .json(&segment)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(transcription_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}
