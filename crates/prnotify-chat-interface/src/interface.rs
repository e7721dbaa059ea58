use async_trait::async_trait;

use crate::{
    types::{Block, ChatMessage, OutgoingMessage},
    Result,
};

/// Chat API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Post a new message on a channel, returning its timestamp id.
    async fn messages_post(&self, channel: &str, message: &OutgoingMessage) -> Result<String>;
    /// Replace the content of an existing message, returning its timestamp id.
    async fn messages_update(
        &self,
        channel: &str,
        ts: &str,
        message: &OutgoingMessage,
    ) -> Result<String>;
    /// Reply in the thread rooted at `thread_ts`, returning the reply timestamp id.
    async fn thread_replies_post(
        &self,
        channel: &str,
        thread_ts: &str,
        blocks: &[Block],
    ) -> Result<String>;
    /// List the most recent channel messages, newest first.
    async fn messages_history(&self, channel: &str, limit: u32) -> Result<Vec<ChatMessage>>;
}
