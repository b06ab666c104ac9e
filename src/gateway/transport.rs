// src/gateway/transport.rs
use async_trait::async_trait;

use crate::error::AppResult;

/// One inbound chat message, as delivered by the platform session.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub channel_id: String,
    pub message_id: String,
    pub author_id: String,
    pub content: String,
}

/// Outbound side of the chat platform.
///
/// Implementations deliver payloads built by the formatter; they never build
/// payloads themselves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one text message to a channel.
    async fn send_message(&self, channel_id: &str, body: &str) -> AppResult<()>;

    /// Attach a reaction glyph to an existing message.
    async fn react(&self, channel_id: &str, message_id: &str, emoji: &str) -> AppResult<()>;
}
