use serde::{Deserialize, Serialize};

use super::{GhMergeCommit, GhMergeableState, GhPullRequestState};
use crate::types::{
    common::{GhActor, GhRepositoryInfo},
    reviews::{GhReview, GhReviewRequest},
};

/// Pull request snapshot, fetched once per run.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequestRecord {
    /// Number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// Body.
    pub body: Option<String>,
    /// URL.
    pub url: String,
    /// State.
    pub state: GhPullRequestState,
    /// Merged?
    pub merged: bool,
    /// Mergeability.
    pub mergeable: GhMergeableState,
    /// Author.
    pub author: GhActor,
    /// Base branch name.
    pub base_ref_name: String,
    /// Head branch name.
    pub head_ref_name: String,
    /// Commits count.
    pub commits_count: u64,
    /// Changed files count.
    pub changed_files: u64,
    /// Merge commit, if merged.
    pub merge_commit: Option<GhMergeCommit>,
    /// Currently pending review requests.
    pub review_requests: Vec<GhReviewRequest>,
    /// Submitted reviews, oldest first.
    pub reviews: Vec<GhReview>,
    /// Repository.
    pub repository: GhRepositoryInfo,
}
