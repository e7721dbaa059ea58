use serde::Serialize;

use crate::events::{PULL_REQUEST_EVENT, PULL_REQUEST_REVIEW_EVENT};

/// Change-log narrative appended to a status thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NarrativeKind {
    Closed,
    ReviewRequested,
    Submitted,
}

/// Map an (event type, action) pair to its narrative, `None` when unsupported.
pub fn classify(event_type: &str, action: &str) -> Option<NarrativeKind> {
    match (event_type, action) {
        (PULL_REQUEST_EVENT, "closed") => Some(NarrativeKind::Closed),
        (PULL_REQUEST_EVENT, "review_requested" | "review_request_removed") => {
            Some(NarrativeKind::ReviewRequested)
        }
        (PULL_REQUEST_REVIEW_EVENT, "submitted") => Some(NarrativeKind::Submitted),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_events() {
        assert_eq!(
            classify("pull_request", "closed"),
            Some(NarrativeKind::Closed)
        );
        assert_eq!(
            classify("pull_request", "review_requested"),
            Some(NarrativeKind::ReviewRequested)
        );
        assert_eq!(
            classify("pull_request", "review_request_removed"),
            Some(NarrativeKind::ReviewRequested)
        );
        assert_eq!(
            classify("pull_request_review", "submitted"),
            Some(NarrativeKind::Submitted)
        );
    }

    #[test]
    fn unsupported_events() {
        assert_eq!(classify("pull_request", "opened"), None);
        assert_eq!(classify("pull_request", "edited"), None);
        assert_eq!(classify("pull_request_review", "edited"), None);
        assert_eq!(classify("pull_request_review", "closed"), None);
        assert_eq!(classify("issues", "closed"), None);
        assert_eq!(classify("", ""), None);
    }
}
