//! Null driver for the chat API.
//!
//! Nothing leaves the process: posted blocks are logged and history is always empty.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use prnotify_chat_interface::{
    types::{Block, ChatMessage, OutgoingMessage},
    ChatService, Result,
};
use tracing::info;

/// Null chat service.
#[derive(Default)]
pub struct NullChatService {
    counter: AtomicU64,
}

impl NullChatService {
    /// Build a null chat service.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_ts(&self) -> String {
        let value = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{value}.000000")
    }
}

fn blocks_to_json(blocks: &[Block]) -> String {
    serde_json::to_string(blocks).unwrap_or_default()
}

#[async_trait]
impl ChatService for NullChatService {
    #[tracing::instrument(skip(self, message), ret)]
    async fn messages_post(&self, channel: &str, message: &OutgoingMessage) -> Result<String> {
        info!(
            channel = channel,
            blocks = %blocks_to_json(&message.blocks),
            message = "Would post message"
        );

        Ok(self.next_ts())
    }

    #[tracing::instrument(skip(self, message), ret)]
    async fn messages_update(
        &self,
        channel: &str,
        ts: &str,
        message: &OutgoingMessage,
    ) -> Result<String> {
        info!(
            channel = channel,
            ts = ts,
            blocks = %blocks_to_json(&message.blocks),
            message = "Would update message"
        );

        Ok(ts.into())
    }

    #[tracing::instrument(skip(self, blocks), ret)]
    async fn thread_replies_post(
        &self,
        channel: &str,
        thread_ts: &str,
        blocks: &[Block],
    ) -> Result<String> {
        info!(
            channel = channel,
            thread_ts = thread_ts,
            blocks = %blocks_to_json(blocks),
            message = "Would reply in thread"
        );

        Ok(self.next_ts())
    }

    #[tracing::instrument(skip(self))]
    async fn messages_history(&self, channel: &str, limit: u32) -> Result<Vec<ChatMessage>> {
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn post_then_update() {
        let service = NullChatService::new();
        let message = OutgoingMessage {
            text: "hello".into(),
            blocks: vec![Block::section("hello")],
            metadata: None,
        };

        let first = service.messages_post("C01", &message).await.unwrap();
        let second = service.messages_post("C01", &message).await.unwrap();
        assert_ne!(first, second);

        assert_eq!(
            service.messages_update("C01", &first, &message).await.unwrap(),
            first
        );
        assert!(service.messages_history("C01", 10).await.unwrap().is_empty());
    }
}
