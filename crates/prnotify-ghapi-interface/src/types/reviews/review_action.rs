use serde::{Deserialize, Serialize};

/// GitHub Review action.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhReviewAction {
    /// Submitted.
    #[default]
    Submitted,
    /// Edited.
    Edited,
    /// Dismissed.
    Dismissed,
    /// Any other action.
    #[serde(other)]
    Other,
}

impl GhReviewAction {
    /// Webhook name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Edited => "edited",
            Self::Dismissed => "dismissed",
            Self::Other => "other",
        }
    }
}
