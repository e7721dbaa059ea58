use serde::{Deserialize, Serialize};

/// Merge commit of a merged pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhMergeCommit {
    /// Commit headline.
    pub headline: String,
    /// Commit body.
    pub body: String,
    /// Commit SHA.
    pub sha: String,
}
