mod blocks;
mod message;

pub use blocks::{Block, TextObject};
pub use message::{ChatMessage, ChatMessageMetadata, OutgoingMessage};
