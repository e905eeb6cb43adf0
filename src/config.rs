use crate::recognition::RecognitionOptions;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub recognition: RecognitionConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct RecognitionConfig {
    /// Provider WebSocket endpoint (e.g. "wss://api.deepgram.com")
    pub endpoint: String,

    /// API key; set via SCRIBE_RECOGNITION__API_KEY rather than the file
    pub api_key: String,

    pub model: String,
    pub language: String,
    pub punctuate: bool,
    pub interim_results: bool,
    pub diarize: bool,
}

impl RecognitionConfig {
    pub fn options(&self) -> RecognitionOptions {
        RecognitionOptions {
            model: self.model.clone(),
            language: self.language.clone(),
            punctuate: self.punctuate,
            interim_results: self.interim_results,
            diarize: self.diarize,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    /// Base URL of the storage collaborator's REST API
    pub base_url: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "scribe-relay")?
            .set_default("service.http.bind", "0.0.0.0")?
            .set_default("service.http.port", 8700)?
            .set_default("recognition.endpoint", "wss://api.deepgram.com")?
            .set_default("recognition.api_key", "")?
            .set_default("recognition.model", "nova-2")?
            .set_default("recognition.language", "en")?
            .set_default("recognition.punctuate", true)?
            .set_default("recognition.interim_results", true)?
            .set_default("recognition.diarize", true)?
            .set_default("storage.base_url", "http://localhost:8000/api")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SCRIBE").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
