mod review;
mod review_action;
mod review_event;
mod review_request;
mod review_state;

pub use review::GhReview;
pub use review_action::GhReviewAction;
pub use review_event::{GhReviewEvent, GhWebhookReview, GhWebhookReviewState};
pub use review_request::{GhRequestedReviewer, GhRequestedReviewerKind, GhReviewRequest};
pub use review_state::GhReviewState;
