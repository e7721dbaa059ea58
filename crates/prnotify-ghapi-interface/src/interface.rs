use async_trait::async_trait;

use crate::{
    types::{GhPullRequestRecord, GhPullRequestSummary},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Get a pull request snapshot from its number, with its review requests and reviews.
    async fn pulls_get(&self, owner: &str, name: &str, pr_number: u64)
        -> Result<GhPullRequestRecord>;
    /// List the last 100 pull requests of a repository, oldest first.
    async fn pulls_list_recent(&self, owner: &str, name: &str) -> Result<Vec<GhPullRequestSummary>>;
}
