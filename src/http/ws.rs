use crate::protocol::ClientMessage;
use crate::session::{ClientFrame, ClientSink, ClientSource, CloseCode};
use async_trait::async_trait;
use axum::extract::ws::{CloseFrame, Message, WebSocket};
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tracing::debug;

/// Split an accepted client socket into the halves the session consumes.
pub fn split_socket(socket: WebSocket) -> (WsClientSource, WsClientSink) {
    let (sink, stream) = socket.split();
    (
        WsClientSource { stream },
        WsClientSink {
            sink,
            closed: false,
        },
    )
}

/// Read half: binary frames are audio, text frames are reserved.
pub struct WsClientSource {
    stream: SplitStream<WebSocket>,
}

#[async_trait]
impl ClientSource for WsClientSource {
    async fn recv(&mut self) -> Option<ClientFrame> {
        while let Some(frame) = self.stream.next().await {
            match frame {
                Ok(Message::Binary(bytes)) => return Some(ClientFrame::Audio(bytes)),
                Ok(Message::Text(text)) => return Some(ClientFrame::Text(text)),
                Ok(Message::Close(_)) => return None,
                // Pings and pongs are handled by the transport.
                Ok(_) => continue,
                Err(e) => {
                    debug!("Client socket error: {}", e);
                    return None;
                }
            }
        }
        None
    }
}

/// Write half: serializes outbound messages as JSON text frames.
pub struct WsClientSink {
    sink: SplitSink<WebSocket, Message>,
    closed: bool,
}

#[async_trait]
impl ClientSink for WsClientSink {
    async fn send(&mut self, message: ClientMessage) -> anyhow::Result<()> {
        let json = serde_json::to_string(&message)?;
        self.sink.send(Message::Text(json)).await?;
        Ok(())
    }

    async fn close(&mut self, code: CloseCode) -> anyhow::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.sink
            .send(Message::Close(Some(CloseFrame {
                code: code.as_u16(),
                reason: "".into(),
            })))
            .await?;
        Ok(())
    }
}
