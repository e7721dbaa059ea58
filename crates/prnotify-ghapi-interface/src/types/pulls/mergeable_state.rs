use serde::{Deserialize, Serialize};

/// Pull request mergeability, as computed upstream.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GhMergeableState {
    /// Can be merged.
    Mergeable,
    /// Has conflicts with the base branch.
    Conflicting,
    /// Not computed yet.
    #[default]
    Unknown,
}
