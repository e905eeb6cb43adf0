use crate::protocol::ClientMessage;
use async_trait::async_trait;

/// Close codes sent on the client channel, distinguishing why a session
/// ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseCode {
    /// Session ran to completion
    Normal,
    /// The provider connection could not be established
    ProviderConnectFailure,
    /// Missing or unknown transcription identifier in the path
    InvalidSession,
    /// An active session already exists for this identifier
    DuplicateSession,
    /// The provider reported a fatal mid-stream fault
    ProviderRuntimeError,
}

impl CloseCode {
    pub fn as_u16(self) -> u16 {
        match self {
            CloseCode::Normal => 1000,
            CloseCode::ProviderConnectFailure => 4000,
            CloseCode::InvalidSession => 4001,
            CloseCode::DuplicateSession => 4002,
            CloseCode::ProviderRuntimeError => 4003,
        }
    }
}

/// One inbound client frame.
#[derive(Debug, Clone)]
pub enum ClientFrame {
    /// Raw audio bytes to forward to the provider
    Audio(Vec<u8>),
    /// Text frames are reserved for future control messages
    Text(String),
}

/// Read half of the client connection. `recv` returning `None` means
/// the client disconnected.
#[async_trait]
pub trait ClientSource: Send {
    async fn recv(&mut self) -> Option<ClientFrame>;
}

/// Write half of the client connection.
#[async_trait]
pub trait ClientSink: Send {
    async fn send(&mut self, message: ClientMessage) -> anyhow::Result<()>;

    async fn close(&mut self, code: CloseCode) -> anyhow::Result<()>;
}
