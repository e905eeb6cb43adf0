use super::channel::{ClientFrame, ClientSink, ClientSource, CloseCode};
use super::config::SessionConfig;
use super::registry::SessionRegistry;
use super::state::SessionState;
use crate::error::{RecognitionError, SessionError, StoreError};
use crate::protocol::{ClientMessage, EventNotice, SegmentPayload};
use crate::recognition::{
    RecognitionClient, RecognitionEvent, RecognitionHandle, RecognitionSink, TranscriptResult,
};
use crate::store::{SegmentWriter, TranscriptSegment, TranscriptionStore};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

/// Why the streaming loop ended.
enum Outcome {
    ClientGone,
    ProviderClosed,
    Failed(SessionError),
}

fn close_code(error: &SessionError) -> CloseCode {
    match error {
        SessionError::InvalidSession(_) => CloseCode::InvalidSession,
        SessionError::DuplicateSession(_) => CloseCode::DuplicateSession,
        SessionError::Recognition(RecognitionError::Connection(_)) => {
            CloseCode::ProviderConnectFailure
        }
        SessionError::Recognition(_) => CloseCode::ProviderRuntimeError,
        // Startup storage faults close the channel like an unknown id.
        SessionError::Persistence(_) => CloseCode::InvalidSession,
    }
}

/// Owns one live transcription session: the client channel, the
/// provider stream, and segment persistence, under the lifecycle
/// Connecting -> Streaming -> Closing -> Closed, with Failed as the
/// terminal state for fatal faults.
pub struct SessionManager {
    session_id: String,
    config: SessionConfig,
    registry: Arc<SessionRegistry>,
    recognition: Arc<dyn RecognitionClient>,
    store: Arc<dyn TranscriptionStore>,
    state_tx: watch::Sender<SessionState>,
}

impl SessionManager {
    pub fn new(
        session_id: impl Into<String>,
        config: SessionConfig,
        registry: Arc<SessionRegistry>,
        recognition: Arc<dyn RecognitionClient>,
        store: Arc<dyn TranscriptionStore>,
    ) -> Self {
        let (state_tx, _) = watch::channel(SessionState::Connecting);
        Self {
            session_id: session_id.into(),
            config,
            registry,
            recognition,
            store,
            state_tx,
        }
    }

    pub fn state(&self) -> SessionState {
        *self.state_tx.borrow()
    }

    fn set_state(&self, state: SessionState) {
        debug!("Session {} -> {:?}", self.session_id, state);
        self.state_tx.send_replace(state);
    }

    /// Drive the session to completion on the given client connection
    /// halves. Returns the terminal state.
    pub async fn run<R, W>(self, source: R, mut sink: W) -> SessionState
    where
        R: ClientSource + 'static,
        W: ClientSink,
    {
        match self.connect(&mut sink).await {
            Ok((handle, inbox)) => {
                self.stream(source, &mut sink, handle, inbox).await;
            }
            Err(error) => {
                self.fail_startup(&mut sink, error).await;
            }
        }

        let state = self.state();
        info!("Session {} ended: {:?}", self.session_id, state);
        state
    }

    /// Connecting: validate the transcription, claim the identifier,
    /// open the provider stream.
    async fn connect<W: ClientSink>(
        &self,
        sink: &mut W,
    ) -> Result<(RecognitionHandle, mpsc::Receiver<ClientMessage>), SessionError> {
        // The transcription record must exist before streaming starts.
        if let Err(e) = self.store.get_transcription(&self.session_id).await {
            return Err(match e {
                StoreError::NotFound(id) => SessionError::InvalidSession(id),
                other => SessionError::Persistence(other),
            });
        }

        // Claim the identifier before touching the provider. Exactly one
        // concurrent attempt can win this insert.
        let (outbound_tx, outbound_rx) = mpsc::channel(self.config.outbound_buffer);
        self.registry
            .register(&self.session_id, self.state_tx.subscribe(), outbound_tx)
            .await?;

        match self.recognition.open(&self.config.recognition).await {
            Ok(handle) => {
                self.set_state(SessionState::Streaming);
                let _ = sink
                    .send(ClientMessage::Status(
                        "Recognition stream connected. Ready for audio.".to_string(),
                    ))
                    .await;
                Ok((handle, outbound_rx))
            }
            Err(e) => {
                // The identifier was claimed above; release it on the way out.
                self.registry.deregister(&self.session_id).await;
                Err(SessionError::Recognition(e))
            }
        }
    }

    /// Startup failure: one error message, then close with a
    /// distinguishable code. The session never reaches Streaming.
    async fn fail_startup<W: ClientSink>(&self, sink: &mut W, error: SessionError) {
        warn!("Session {} failed to start: {}", self.session_id, error);
        self.set_state(SessionState::Failed);
        let _ = sink.send(ClientMessage::Error(error.to_string())).await;
        let _ = sink.close(close_code(&error)).await;
    }

    /// Streaming: service client audio, provider events, and the
    /// registry broadcast inbox until one side ends the session.
    async fn stream<R, W>(
        &self,
        source: R,
        sink: &mut W,
        handle: RecognitionHandle,
        mut inbox: mpsc::Receiver<ClientMessage>,
    ) where
        R: ClientSource + 'static,
        W: ClientSink,
    {
        let RecognitionHandle {
            sink: mut provider,
            mut events,
        } = handle;

        let writer = SegmentWriter::new(Arc::clone(&self.store), self.session_id.clone());

        // Pump client frames through a channel so audio forwarding stays
        // ordered while events interleave with it.
        let (frame_tx, mut frames) = mpsc::channel(self.config.frame_buffer);
        let pump = tokio::spawn(pump_frames(source, frame_tx));

        let outcome = loop {
            tokio::select! {
                frame = frames.recv() => match frame {
                    Some(ClientFrame::Audio(chunk)) => {
                        if let Err(e) = provider.send_audio(chunk).await {
                            error!("Session {}: audio forward failed: {}", self.session_id, e);
                            break Outcome::Failed(SessionError::Recognition(e));
                        }
                    }
                    Some(ClientFrame::Text(text)) => {
                        // Reserved for future control messages.
                        debug!("Session {}: ignoring text frame: {}", self.session_id, text);
                    }
                    None => {
                        info!("Session {}: client disconnected", self.session_id);
                        break Outcome::ClientGone;
                    }
                },
                event = events.recv() => match event {
                    Some(RecognitionEvent::ProviderError(message)) => {
                        error!("Session {}: provider error: {}", self.session_id, message);
                        break Outcome::Failed(SessionError::Recognition(
                            RecognitionError::Provider(message),
                        ));
                    }
                    Some(RecognitionEvent::ProviderClosed) | None => {
                        info!("Session {}: provider closed the stream", self.session_id);
                        break Outcome::ProviderClosed;
                    }
                    Some(event) => {
                        // A fault in one event never takes the session down.
                        if let Err(e) = self.dispatch(sink, &writer, event).await {
                            error!(
                                "Session {}: error processing provider event: {}",
                                self.session_id, e
                            );
                        }
                    }
                },
                Some(message) = inbox.recv() => {
                    if sink.send(message).await.is_err() {
                        break Outcome::ClientGone;
                    }
                }
            }
        };

        pump.abort();
        self.shutdown(sink, provider, outcome).await;
    }

    /// Dispatch one provider event. Transcripts go to the client and,
    /// when finalized, to the store; notices go to the client only.
    async fn dispatch<W: ClientSink>(
        &self,
        sink: &mut W,
        writer: &SegmentWriter,
        event: RecognitionEvent,
    ) -> anyhow::Result<()> {
        match event {
            RecognitionEvent::InterimTranscript(result)
            | RecognitionEvent::FinalTranscript(result) => {
                self.handle_transcript(sink, writer, result).await
            }
            RecognitionEvent::SpeechStarted { .. } => {
                sink.send(ClientMessage::Event(EventNotice::SpeechStarted))
                    .await
            }
            RecognitionEvent::UtteranceEnd { .. } => {
                sink.send(ClientMessage::Event(EventNotice::UtteranceEnd))
                    .await
            }
            // Terminal variants are handled by the streaming loop.
            RecognitionEvent::ProviderError(_) | RecognitionEvent::ProviderClosed => Ok(()),
        }
    }

    async fn handle_transcript<W: ClientSink>(
        &self,
        sink: &mut W,
        writer: &SegmentWriter,
        result: TranscriptResult,
    ) -> anyhow::Result<()> {
        // Results with no text are dropped outright: nothing to show,
        // nothing to save.
        if result.text.is_empty() {
            return Ok(());
        }

        // First word's speaker id stands in for the whole segment.
        let speaker = result
            .words
            .first()
            .and_then(|w| w.speaker)
            .map(|id| format!("speaker_{}", id));
        let end = result.start + result.duration;

        sink.send(ClientMessage::TranscriptSegment(SegmentPayload {
            text: result.text.clone(),
            is_final: result.is_final,
            speech_final: result.speech_final,
            speaker: speaker.clone(),
            start: result.start,
            end,
        }))
        .await?;

        // Finality of either kind is the single persistence trigger.
        if result.is_final || result.speech_final {
            let segment = TranscriptSegment {
                text: result.text,
                speaker,
                start_time: result.start,
                end_time: end,
                is_final: result.is_final,
            };
            if let Err(e) = writer.append(segment).await {
                warn!(
                    "Session {}: failed to persist segment: {}",
                    self.session_id, e
                );
                let _ = sink
                    .send(ClientMessage::Event(EventNotice::PersistenceWarning {
                        message: format!("Failed to save transcript segment: {}", e),
                    }))
                    .await;
            }
        }

        Ok(())
    }

    /// Release the provider stream, the registry entry, and the client
    /// channel, landing in Closed or Failed.
    async fn shutdown<W: ClientSink>(
        &self,
        sink: &mut W,
        mut provider: Box<dyn RecognitionSink>,
        outcome: Outcome,
    ) {
        match outcome {
            Outcome::Failed(error) => {
                self.set_state(SessionState::Failed);
                let _ = sink.send(ClientMessage::Error(error.to_string())).await;
                if let Err(e) = provider.close().await {
                    debug!("Session {}: provider close failed: {}", self.session_id, e);
                }
                self.registry.deregister(&self.session_id).await;
                let _ = sink.close(close_code(&error)).await;
            }
            Outcome::ClientGone | Outcome::ProviderClosed => {
                self.set_state(SessionState::Closing);
                if let Err(e) = provider.close().await {
                    debug!("Session {}: provider close failed: {}", self.session_id, e);
                }
                self.registry.deregister(&self.session_id).await;
                let _ = sink.close(CloseCode::Normal).await;
                self.set_state(SessionState::Closed);
            }
        }
    }
}

/// Forward client frames into the session loop until the client
/// disconnects or the session stops listening.
async fn pump_frames<R: ClientSource>(mut source: R, tx: mpsc::Sender<ClientFrame>) {
    while let Some(frame) = source.recv().await {
        if tx.send(frame).await.is_err() {
            break;
        }
    }
}
