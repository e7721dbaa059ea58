//! Inbound events.

use prnotify_ghapi_interface::types::{
    GhPullRequestEvent, GhRequestedReviewer, GhRequestedReviewerKind, GhReview, GhReviewEvent,
    GhReviewRequest,
};
use serde::Deserialize;

use crate::{CoreError, Result};

pub const PULL_REQUEST_EVENT: &str = "pull_request";
pub const PULL_REQUEST_REVIEW_EVENT: &str = "pull_request_review";

/// Event delivered to a single invocation, normalized from its webhook payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundEvent {
    pub event_type: String,
    pub action: String,
    /// Zero when the payload does not target a pull request.
    pub pull_request_number: u64,
    /// Requested (or removed) reviewer, for review request events.
    pub review_request: Option<GhReviewRequest>,
    /// Submitted review, for review events.
    pub review: Option<GhReview>,
}

#[derive(Deserialize)]
struct AnyEvent {
    #[serde(default)]
    action: String,
}

impl InboundEvent {
    /// Normalize a raw webhook payload.
    ///
    /// Unknown event names are kept with their action so they can be reported as unsupported.
    pub fn from_webhook_payload(event_name: &str, payload: &str) -> Result<Self> {
        let payload_error = |e| CoreError::PayloadError {
            event_name: event_name.into(),
            source: e,
        };

        match event_name {
            PULL_REQUEST_EVENT => {
                let event: GhPullRequestEvent =
                    serde_json::from_str(payload).map_err(payload_error)?;
                Ok(Self::from_pull_request_event(event))
            }
            PULL_REQUEST_REVIEW_EVENT => {
                let event: GhReviewEvent = serde_json::from_str(payload).map_err(payload_error)?;
                Ok(Self::from_review_event(event))
            }
            _ => {
                let event: AnyEvent = serde_json::from_str(payload).map_err(payload_error)?;
                Ok(Self {
                    event_type: event_name.into(),
                    action: event.action,
                    ..Default::default()
                })
            }
        }
    }

    fn from_pull_request_event(event: GhPullRequestEvent) -> Self {
        let review_request = match (event.requested_reviewer, event.requested_team) {
            (Some(user), _) => Some(GhReviewRequest {
                requested_reviewer: GhRequestedReviewer {
                    login: user.login,
                    url: user.html_url,
                    kind: GhRequestedReviewerKind::User,
                },
            }),
            (None, Some(team)) => Some(GhReviewRequest {
                requested_reviewer: GhRequestedReviewer {
                    login: team.name,
                    url: team.html_url,
                    kind: GhRequestedReviewerKind::Team,
                },
            }),
            (None, None) => None,
        };

        Self {
            event_type: PULL_REQUEST_EVENT.into(),
            action: event.action.as_str().into(),
            pull_request_number: event.pull_request.number,
            review_request,
            review: None,
        }
    }

    fn from_review_event(event: GhReviewEvent) -> Self {
        Self {
            event_type: PULL_REQUEST_REVIEW_EVENT.into(),
            action: event.action.as_str().into(),
            pull_request_number: event.pull_request.number,
            review_request: None,
            review: Some(event.review.into()),
        }
    }
}
