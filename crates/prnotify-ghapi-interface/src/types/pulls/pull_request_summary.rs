use serde::{Deserialize, Serialize};

use super::GhMergeCommit;

/// Pull request list entry, used to find a pull request from its merge commit.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequestSummary {
    /// Number.
    pub number: u64,
    /// Merge commit, if merged.
    pub merge_commit: Option<GhMergeCommit>,
}
