//! Chat API interface.
//!
//! Block documents, channel messages and the `ChatService` trait implemented by drivers.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;
pub mod types;

pub use errors::{ChatError, Result};
pub use interface::ChatService;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockChatService;
