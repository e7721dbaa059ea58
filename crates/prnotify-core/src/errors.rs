//! Core errors.

use thiserror::Error;

use crate::accounts::AccountsError;

/// Core error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CoreError {
    /// Wraps [`prnotify_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: prnotify_ghapi_interface::ApiError,
    },

    /// Wraps [`prnotify_chat_interface::ChatError`].
    #[error("Chat error: {source}")]
    ChatError {
        source: prnotify_chat_interface::ChatError,
    },

    #[error("Chat accounts error: {source}")]
    AccountsError { source: AccountsError },

    #[error("Could not parse '{}' event payload: {}", event_name, source)]
    PayloadError {
        event_name: String,
        source: serde_json::Error,
    },

    #[error("Invalid repository path '{}', expected 'owner/name'", repository)]
    InvalidRepository { repository: String },
}

impl From<prnotify_ghapi_interface::ApiError> for CoreError {
    fn from(e: prnotify_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<prnotify_chat_interface::ChatError> for CoreError {
    fn from(e: prnotify_chat_interface::ChatError) -> Self {
        Self::ChatError { source: e }
    }
}

impl From<AccountsError> for CoreError {
    fn from(e: AccountsError) -> Self {
        Self::AccountsError { source: e }
    }
}

/// Result alias for `CoreError`.
pub type Result<T> = core::result::Result<T, CoreError>;
