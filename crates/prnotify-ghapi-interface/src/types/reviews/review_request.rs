use serde::{Deserialize, Serialize};

/// Kind of requested reviewer.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GhRequestedReviewerKind {
    /// Single user.
    #[default]
    User,
    /// Team.
    Team,
}

/// Requested reviewer.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRequestedReviewer {
    /// Login, or team name.
    pub login: String,
    /// Profile URL.
    pub url: String,
    /// Kind.
    pub kind: GhRequestedReviewerKind,
}

/// Pending review request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhReviewRequest {
    /// Requested reviewer.
    pub requested_reviewer: GhRequestedReviewer,
}

impl GhReviewRequest {
    /// Build a user review request from a login.
    pub fn for_user(login: &str) -> Self {
        Self {
            requested_reviewer: GhRequestedReviewer {
                login: login.into(),
                url: format!("https://github.com/{login}"),
                kind: GhRequestedReviewerKind::User,
            },
        }
    }
}
