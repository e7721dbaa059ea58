use serde::{Deserialize, Serialize};

use super::GhPullRequestAction;
use crate::types::common::{GhRepository, GhTeam, GhUser};

/// Pull request short format, as embedded in webhook payloads.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhPullRequestShort {
    /// Number.
    pub number: u64,
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Merge commit SHA, once merged.
    #[serde(default)]
    pub merge_commit_sha: Option<String>,
}

/// GitHub Pull request event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Eq, PartialEq)]
pub struct GhPullRequestEvent {
    /// Action.
    pub action: GhPullRequestAction,
    /// Number.
    pub number: u64,
    /// Pull request.
    pub pull_request: GhPullRequestShort,
    /// Requested reviewer.
    #[serde(default)]
    pub requested_reviewer: Option<GhUser>,
    /// Requested team.
    #[serde(default)]
    pub requested_team: Option<GhTeam>,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
