use serde::{Deserialize, Serialize};

use super::Block;

/// Structured metadata attached to a message.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatMessageMetadata {
    /// Application-defined event type.
    pub event_type: String,
    /// Application-defined payload.
    pub event_payload: serde_json::Value,
}

/// Channel message, as read from history.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ChatMessage {
    /// Timestamp id.
    pub ts: String,
    /// Set when a bot authored the message.
    #[serde(default)]
    pub bot_id: Option<String>,
    /// Fallback text.
    #[serde(default)]
    pub text: String,
    /// Metadata.
    #[serde(default)]
    pub metadata: Option<ChatMessageMetadata>,
}

impl ChatMessage {
    /// Was the message posted by a bot?
    pub fn is_bot_authored(&self) -> bool {
        self.bot_id.is_some()
    }
}

/// Message to post or update.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// Fallback text for notifications.
    pub text: String,
    /// Blocks.
    pub blocks: Vec<Block>,
    /// Metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ChatMessageMetadata>,
}
