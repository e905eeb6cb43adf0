use super::client::{RecognitionClient, RecognitionEvent, RecognitionHandle, RecognitionSink};
use super::wire;
use super::RecognitionOptions;
use crate::error::RecognitionError;
use async_trait::async_trait;
use futures::stream::{SplitSink, StreamExt};
use futures::SinkExt;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

/// Provider event buffer. Absorbs short bursts without stalling the
/// read loop while the session services audio.
const EVENT_BUFFER: usize = 64;

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// WebSocket adapter for Deepgram-style live transcription endpoints.
pub struct DeepgramClient {
    endpoint: String,
    api_key: String,
}

impl DeepgramClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    fn listen_url(&self, opts: &RecognitionOptions) -> String {
        format!(
            "{}/v1/listen?model={}&language={}&punctuate={}&interim_results={}&diarize={}",
            self.endpoint.trim_end_matches('/'),
            opts.model,
            opts.language,
            opts.punctuate,
            opts.interim_results,
            opts.diarize
        )
    }
}

#[async_trait]
impl RecognitionClient for DeepgramClient {
    async fn open(
        &self,
        opts: &RecognitionOptions,
    ) -> Result<RecognitionHandle, RecognitionError> {
        let url = self.listen_url(opts);
        info!("Opening recognition stream: {}", url);

        let mut request = url
            .into_client_request()
            .map_err(|e| RecognitionError::Connection(e.to_string()))?;
        let auth = format!("Token {}", self.api_key)
            .parse()
            .map_err(|_| RecognitionError::Connection("malformed api key".to_string()))?;
        request.headers_mut().insert("Authorization", auth);

        let (stream, _response) = tokio_tungstenite::connect_async(request)
            .await
            .map_err(|e| RecognitionError::Connection(e.to_string()))?;

        info!("Recognition stream established");

        let (ws_sink, mut ws_source) = stream.split();
        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);

        // Reader task: provider frames -> ordered RecognitionEvents.
        tokio::spawn(async move {
            while let Some(frame) = ws_source.next().await {
                match frame {
                    Ok(Message::Text(raw)) => {
                        if let Some(event) = wire::decode_event(&raw) {
                            if event_tx.send(event).await.is_err() {
                                // Session consumer is gone.
                                return;
                            }
                        }
                    }
                    Ok(Message::Close(_)) => {
                        let _ = event_tx.send(RecognitionEvent::ProviderClosed).await;
                        return;
                    }
                    // Ping/pong/binary carry nothing to decode.
                    Ok(_) => {}
                    Err(e) => {
                        warn!("Recognition stream transport error: {}", e);
                        let _ = event_tx
                            .send(RecognitionEvent::ProviderError(e.to_string()))
                            .await;
                        return;
                    }
                }
            }
            let _ = event_tx.send(RecognitionEvent::ProviderClosed).await;
        });

        Ok(RecognitionHandle {
            sink: Box::new(DeepgramSink {
                sink: ws_sink,
                closed: false,
            }),
            events: event_rx,
        })
    }
}

struct DeepgramSink {
    sink: WsSink,
    closed: bool,
}

#[async_trait]
impl RecognitionSink for DeepgramSink {
    async fn send_audio(&mut self, chunk: Vec<u8>) -> Result<(), RecognitionError> {
        if self.closed {
            return Err(RecognitionError::Send(
                "recognition stream already closed".to_string(),
            ));
        }
        self.sink
            .send(Message::Binary(chunk))
            .await
            .map_err(|e| RecognitionError::Send(e.to_string()))
    }

    async fn close(&mut self) -> Result<(), RecognitionError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        // Ask the provider to flush pending results before the socket drops.
        let close_stream = r#"{"type":"CloseStream"}"#.to_string();
        if let Err(e) = self.sink.send(Message::Text(close_stream)).await {
            debug!("CloseStream send failed (provider likely gone): {}", e);
        }
        if let Err(e) = self.sink.close().await {
            debug!("Recognition sink close failed: {}", e);
        }
        Ok(())
    }
}
