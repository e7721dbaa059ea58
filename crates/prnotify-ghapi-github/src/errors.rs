use prnotify_ghapi_interface::ApiError;

/// GitHub driver error.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid header value: {source}")]
    HeaderError {
        source: http::header::InvalidHeaderValue,
    },

    #[error("GraphQL query failed: {messages}")]
    GraphQlError { messages: String },

    #[error("Pull request #{} not found on repository {}", pr_number, repository_path)]
    NotFound {
        pr_number: u64,
        repository_path: String,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<http::header::InvalidHeaderValue> for GitHubError {
    fn from(e: http::header::InvalidHeaderValue) -> Self {
        GitHubError::HeaderError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::NotFound {
                pr_number,
                repository_path,
            } => ApiError::NotFound {
                pr_number,
                repository_path,
            },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
