//! Block document renderers.

mod links;
mod narratives;
mod status;

pub use links::{escape, escape_truncated, link, truncate, user_link};
pub use narratives::NarrativeRenderer;
pub use status::{StatusMessage, StatusRenderer};
