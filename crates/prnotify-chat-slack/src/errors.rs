use prnotify_chat_interface::ChatError;

/// Slack driver error.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum SlackError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid header value: {source}")]
    HeaderError {
        source: http::header::InvalidHeaderValue,
    },

    #[error("Slack method '{}' failed: {}", method, error)]
    MethodError { method: String, error: String },
}

impl From<reqwest::Error> for SlackError {
    fn from(e: reqwest::Error) -> Self {
        SlackError::HttpError { source: e }
    }
}

impl From<http::header::InvalidHeaderValue> for SlackError {
    fn from(e: http::header::InvalidHeaderValue) -> Self {
        SlackError::HeaderError { source: e }
    }
}

impl From<SlackError> for ChatError {
    fn from(e: SlackError) -> Self {
        match e {
            SlackError::MethodError { method, error } => ChatError::Platform { method, error },
            e => ChatError::ImplementationError { source: e.into() },
        }
    }
}
