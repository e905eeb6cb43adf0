//! Provider wire format (Deepgram-style live transcription messages)

use super::client::{RecognitionEvent, TranscriptResult, TranscriptWord};
use serde::Deserialize;
use tracing::warn;

/// Top-level provider frame, dispatched on `type`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ProviderMessage {
    Results(ResultsMessage),
    UtteranceEnd(UtteranceEndMessage),
    SpeechStarted(SpeechStartedMessage),
    Metadata(serde_json::Value),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
pub struct ResultsMessage {
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub speech_final: bool,
    pub channel: ResultsChannel,
}

#[derive(Debug, Deserialize)]
pub struct ResultsChannel {
    pub alternatives: Vec<ResultsAlternative>,
}

#[derive(Debug, Deserialize)]
pub struct ResultsAlternative {
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub words: Vec<ResultsWord>,
}

#[derive(Debug, Deserialize)]
pub struct ResultsWord {
    pub word: String,
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub speaker: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct UtteranceEndMessage {
    #[serde(default)]
    pub last_word_end: f64,
}

#[derive(Debug, Deserialize)]
pub struct SpeechStartedMessage {
    #[serde(default)]
    pub timestamp: f64,
}

/// Decode one provider text frame into a recognition event.
///
/// Returns `None` for frames the session does not act on: metadata,
/// unknown message types, results without an alternative, and frames
/// that fail to parse (logged, never fatal).
pub fn decode_event(raw: &str) -> Option<RecognitionEvent> {
    let message: ProviderMessage = match serde_json::from_str(raw) {
        Ok(message) => message,
        Err(e) => {
            warn!("Failed to parse provider message: {}", e);
            return None;
        }
    };

    match message {
        ProviderMessage::Results(results) => {
            let alternative = results.channel.alternatives.into_iter().next()?;
            let result = TranscriptResult {
                text: alternative.transcript,
                words: alternative
                    .words
                    .into_iter()
                    .map(|w| TranscriptWord {
                        word: w.word,
                        start: w.start,
                        end: w.end,
                        speaker: w.speaker,
                    })
                    .collect(),
                start: results.start,
                duration: results.duration,
                is_final: results.is_final,
                speech_final: results.speech_final,
            };
            if result.is_final {
                Some(RecognitionEvent::FinalTranscript(result))
            } else {
                Some(RecognitionEvent::InterimTranscript(result))
            }
        }
        ProviderMessage::UtteranceEnd(utterance) => Some(RecognitionEvent::UtteranceEnd {
            last_word_end: utterance.last_word_end,
        }),
        ProviderMessage::SpeechStarted(speech) => Some(RecognitionEvent::SpeechStarted {
            timestamp: speech.timestamp,
        }),
        ProviderMessage::Metadata(_) | ProviderMessage::Unknown => None,
    }
}
