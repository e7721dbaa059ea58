use prnotify_ghapi_interface::types::{GhMergeableState, GhPullRequestRecord, GhPullRequestState};
use serde::Serialize;

use super::reconciliation::ReconciledReviewers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReviewLabel {
    Approved,
    NoReview,
    ChangesRequested,
    ReviewRequested,
}

impl ReviewLabel {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Approved => "Changes approved",
            Self::NoReview => "No requested reviewer",
            Self::ChangesRequested => "Changes requested",
            Self::ReviewRequested => "Review requested",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MergeLabel {
    NoConflicts,
    MustResolve,
    MergeComplete,
    ClosedWithoutMerge,
}

impl MergeLabel {
    pub fn text(&self) -> &'static str {
        match self {
            Self::NoConflicts => "This branch has no conflicts with the base branch",
            Self::MustResolve => "This branch has conflicts that must be resolved",
            Self::MergeComplete => "The merge is complete",
            Self::ClosedWithoutMerge => "This pull request have been closed without merge.",
        }
    }
}

/// Labels shown on a status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    /// Only set on open pull requests.
    pub review_label: Option<ReviewLabel>,
    pub merge_label: MergeLabel,
}

pub fn summarize(
    pull_request: &GhPullRequestRecord,
    reconciled: &ReconciledReviewers,
) -> StatusSummary {
    let open = pull_request.state == GhPullRequestState::Open;

    let review_label = open.then(|| {
        if reconciled.everybody_approved() {
            ReviewLabel::Approved
        } else if reconciled.is_empty() {
            ReviewLabel::NoReview
        } else if !reconciled.change_requesteds.is_empty() {
            ReviewLabel::ChangesRequested
        } else {
            ReviewLabel::ReviewRequested
        }
    });

    let merge_label = if open {
        if pull_request.mergeable == GhMergeableState::Mergeable {
            MergeLabel::NoConflicts
        } else {
            MergeLabel::MustResolve
        }
    } else if pull_request.merged || pull_request.state == GhPullRequestState::Merged {
        MergeLabel::MergeComplete
    } else {
        MergeLabel::ClosedWithoutMerge
    };

    StatusSummary {
        review_label,
        merge_label,
    }
}

/// Plural suffix for a list.
pub fn plural<T>(items: &[T]) -> &'static str {
    if items.len() > 1 {
        "s"
    } else {
        ""
    }
}
