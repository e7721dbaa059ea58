use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// GitHub Review state.
#[derive(Debug, Deserialize, Serialize, PartialEq, Default, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GhReviewState {
    /// Approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    #[default]
    Commented,
    /// Dismissed.
    Dismissed,
    /// Pending.
    Pending,
}

impl Display for GhReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serde_plain::to_string(&self).map_err(|_| std::fmt::Error)?)
    }
}
