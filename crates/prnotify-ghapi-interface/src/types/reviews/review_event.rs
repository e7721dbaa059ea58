use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{GhReview, GhReviewAction, GhReviewState};
use crate::types::{
    common::{GhRepository, GhUser},
    pulls::GhPullRequestShort,
};

/// Review state, as sent in webhook payloads.
#[derive(Debug, Deserialize, Serialize, PartialEq, Default, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum GhWebhookReviewState {
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

impl From<GhWebhookReviewState> for GhReviewState {
    fn from(state: GhWebhookReviewState) -> Self {
        match state {
            GhWebhookReviewState::Approved => Self::Approved,
            GhWebhookReviewState::ChangesRequested => Self::ChangesRequested,
            GhWebhookReviewState::Commented => Self::Commented,
            GhWebhookReviewState::Dismissed => Self::Dismissed,
            GhWebhookReviewState::Pending => Self::Pending,
        }
    }
}

/// Review, as sent in webhook payloads.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhWebhookReview {
    /// User.
    pub user: GhUser,
    /// Body.
    #[serde(default)]
    pub body: Option<String>,
    /// State.
    pub state: GhWebhookReviewState,
    /// Submitted at.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
}

impl From<GhWebhookReview> for GhReview {
    fn from(review: GhWebhookReview) -> Self {
        Self {
            author: review.user.into(),
            body: review.body,
            state: review.state.into(),
            updated_at: review.submitted_at.unwrap_or_else(OffsetDateTime::now_utc),
        }
    }
}

/// GitHub Review event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhReviewEvent {
    /// Action.
    pub action: GhReviewAction,
    /// Review.
    pub review: GhWebhookReview,
    /// Pull request.
    pub pull_request: GhPullRequestShort,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
