//! Chat errors.

use thiserror::Error;

/// Chat error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ChatError {
    /// The chat platform answered but refused the call.
    #[error("Chat method '{}' failed: {}", method, error)]
    Platform { method: String, error: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ChatError`.
pub type Result<T, E = ChatError> = core::result::Result<T, E>;
