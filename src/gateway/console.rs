// src/gateway/console.rs
//
// Console chat session: every stdin line is one inbound message, outbound
// payloads and reactions go to stdout. Doubles as the shipped binary's
// platform collaborator and signals disconnect when stdin closes.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::AsyncBufReadExt;

use crate::error::AppResult;
use crate::gateway::{ChatTransport, DisconnectHandle, IncomingMessage, MessageHandler};

/// Transport that prints payloads to stdout.
pub struct ConsoleTransport;

#[async_trait]
impl ChatTransport for ConsoleTransport {
    async fn send_message(&self, _channel_id: &str, body: &str) -> AppResult<()> {
        println!("{}", body);
        Ok(())
    }

    async fn react(&self, _channel_id: &str, _message_id: &str, emoji: &str) -> AppResult<()> {
        println!("{}", emoji);
        Ok(())
    }
}

pub struct ConsoleSession {
    handler: Arc<MessageHandler>,
}

impl ConsoleSession {
    pub fn new(handler: Arc<MessageHandler>) -> Self {
        Self { handler }
    }

    /// Read messages until EOF, handling each one sequentially so responses
    /// keep the order of the references within a message. Signals disconnect
    /// exactly once when the stream ends.
    pub async fn run(self, disconnect: DisconnectHandle) -> AppResult<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        let mut sequence: u64 = 0;

        while let Ok(Some(line)) = lines.next_line().await {
            sequence += 1;
            let message = IncomingMessage {
                channel_id: "console".to_string(),
                message_id: sequence.to_string(),
                author_id: "console-user".to_string(),
                content: line,
            };
            self.handler.handle(&message).await;
        }

        log::info!("console session closed after {} message(s)", sequence);
        disconnect.signal();
        Ok(())
    }
}
