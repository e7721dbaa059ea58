//! Slack crate.
//!
//! Contains functions to communicate with the Slack Web API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod auth;
mod errors;
mod slack;

pub use errors::SlackError;
pub use slack::SlackChatService;
