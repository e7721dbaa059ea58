use std::collections::{HashMap, HashSet};

use prnotify_ghapi_interface::types::{GhReview, GhReviewRequest, GhReviewState};
use serde::Serialize;

/// Reviewers of record, split by their latest verdict.
///
/// The three lists are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconciledReviewers {
    pub approvals: Vec<String>,
    pub change_requesteds: Vec<String>,
    pub pendings: Vec<String>,
}

impl ReconciledReviewers {
    pub fn is_empty(&self) -> bool {
        self.approvals.is_empty() && self.change_requesteds.is_empty() && self.pendings.is_empty()
    }

    /// Everybody who was asked has approved.
    pub fn everybody_approved(&self) -> bool {
        !self.approvals.is_empty() && self.change_requesteds.is_empty() && self.pendings.is_empty()
    }
}

/// Merge currently pending review requests with submitted reviews.
///
/// Requested logins start as pending. Reviews are then walked newest first and only the
/// latest review of each author counts: an approval or a change request replaces the pending
/// state, other review states leave it untouched. Authors with neither a request nor a verdict
/// are not reported.
///
/// Requests carry no timestamp, so a reviewer re-requested after approving still shows the
/// approval.
pub fn reconcile(requests: &[GhReviewRequest], reviews: &[GhReview]) -> ReconciledReviewers {
    let mut order: Vec<&str> = Vec::with_capacity(requests.len() + reviews.len());
    let mut states: HashMap<&str, GhReviewState> = HashMap::with_capacity(order.capacity());

    for request in requests {
        let login = request.requested_reviewer.login.as_str();
        if states.insert(login, GhReviewState::Pending).is_none() {
            order.push(login);
        }
    }

    let mut newest_first: Vec<&GhReview> = reviews.iter().rev().collect();
    newest_first.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let mut decided: HashSet<&str> = HashSet::with_capacity(newest_first.len());
    for review in newest_first {
        let login = review.author.login.as_str();
        if !decided.insert(login) {
            continue;
        }

        if matches!(
            review.state,
            GhReviewState::Approved | GhReviewState::ChangesRequested
        ) && states.insert(login, review.state).is_none()
        {
            order.push(login);
        }
    }

    let mut reconciled = ReconciledReviewers::default();
    for login in order {
        let target = match states.get(login) {
            Some(GhReviewState::Approved) => &mut reconciled.approvals,
            Some(GhReviewState::ChangesRequested) => &mut reconciled.change_requesteds,
            Some(GhReviewState::Pending) => &mut reconciled.pendings,
            _ => continue,
        };

        target.push(login.to_string());
    }

    reconciled
}

#[cfg(test)]
mod tests {
    use prnotify_ghapi_interface::types::GhActor;
    use pretty_assertions::assert_eq;
    use time::{macros::datetime, OffsetDateTime};

    use super::*;

    fn request(login: &str) -> GhReviewRequest {
        GhReviewRequest::for_user(login)
    }

    fn review(login: &str, state: GhReviewState, updated_at: OffsetDateTime) -> GhReview {
        GhReview {
            author: GhActor::from_login(login),
            body: None,
            state,
            updated_at,
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    const T1: OffsetDateTime = datetime!(2024-03-01 10:00:00 UTC);
    const T2: OffsetDateTime = datetime!(2024-03-02 10:00:00 UTC);
    const T3: OffsetDateTime = datetime!(2024-03-03 10:00:00 UTC);

    #[test]
    fn empty() {
        assert_eq!(reconcile(&[], &[]), ReconciledReviewers::default());
    }

    #[test]
    fn requested_without_review_is_pending() {
        assert_eq!(
            reconcile(&[request("a"), request("b")], &[]),
            ReconciledReviewers {
                pendings: strings(&["a", "b"]),
                ..Default::default()
            }
        );
    }

    #[test]
    fn approval_replaces_pending() {
        assert_eq!(
            reconcile(&[request("a")], &[review("a", GhReviewState::Approved, T1)]),
            ReconciledReviewers {
                approvals: strings(&["a"]),
                ..Default::default()
            }
        );
    }

    #[test]
    fn latest_verdict_wins() {
        assert_eq!(
            reconcile(
                &[],
                &[
                    review("a", GhReviewState::Approved, T1),
                    review("a", GhReviewState::ChangesRequested, T2)
                ]
            ),
            ReconciledReviewers {
                change_requesteds: strings(&["a"]),
                ..Default::default()
            }
        );
    }

    #[test]
    fn latest_verdict_wins_with_pending_reviewer() {
        assert_eq!(
            reconcile(
                &[request("a"), request("b")],
                &[
                    review("a", GhReviewState::ChangesRequested, T1),
                    review("a", GhReviewState::Approved, T2)
                ]
            ),
            ReconciledReviewers {
                approvals: strings(&["a"]),
                pendings: strings(&["b"]),
                ..Default::default()
            }
        );
    }

    #[test]
    fn timestamps_take_precedence_over_upstream_order() {
        assert_eq!(
            reconcile(
                &[],
                &[
                    review("a", GhReviewState::ChangesRequested, T2),
                    review("a", GhReviewState::Approved, T1)
                ]
            ),
            ReconciledReviewers {
                change_requesteds: strings(&["a"]),
                ..Default::default()
            }
        );
    }

    #[test]
    fn equal_timestamps_keep_last_upstream_review() {
        assert_eq!(
            reconcile(
                &[],
                &[
                    review("a", GhReviewState::ChangesRequested, T1),
                    review("a", GhReviewState::Approved, T1)
                ]
            ),
            ReconciledReviewers {
                approvals: strings(&["a"]),
                ..Default::default()
            }
        );
    }

    #[test]
    fn comment_only_reviewers_are_dropped() {
        assert_eq!(
            reconcile(
                &[],
                &[
                    review("a", GhReviewState::Commented, T1),
                    review("b", GhReviewState::Dismissed, T2)
                ]
            ),
            ReconciledReviewers::default()
        );
    }

    #[test]
    fn comment_keeps_requested_reviewer_pending() {
        assert_eq!(
            reconcile(
                &[request("a")],
                &[review("a", GhReviewState::Commented, T1)]
            ),
            ReconciledReviewers {
                pendings: strings(&["a"]),
                ..Default::default()
            }
        );
    }

    #[test]
    fn comment_after_approval_hides_older_approval() {
        assert_eq!(
            reconcile(
                &[],
                &[
                    review("a", GhReviewState::Approved, T1),
                    review("a", GhReviewState::Commented, T2)
                ]
            ),
            ReconciledReviewers::default()
        );
    }

    #[test]
    fn re_requested_reviewers_keep_latest_verdict() {
        assert_eq!(
            reconcile(
                &[request("a"), request("b")],
                &[
                    review("a", GhReviewState::ChangesRequested, T1),
                    review("b", GhReviewState::Approved, T1),
                    review("a", GhReviewState::Approved, T2),
                    review("b", GhReviewState::ChangesRequested, T3),
                ]
            ),
            ReconciledReviewers {
                approvals: strings(&["a"]),
                change_requesteds: strings(&["b"]),
                ..Default::default()
            }
        );
    }

    #[test]
    fn output_order() {
        assert_eq!(
            reconcile(
                &[request("b"), request("a")],
                &[
                    review("c", GhReviewState::Approved, T1),
                    review("d", GhReviewState::Approved, T3),
                    review("a", GhReviewState::Approved, T2),
                ]
            ),
            ReconciledReviewers {
                approvals: strings(&["a", "d", "c"]),
                pendings: strings(&["b"]),
                ..Default::default()
            }
        );
    }

    #[test]
    fn duplicated_requests() {
        assert_eq!(
            reconcile(&[request("a"), request("a")], &[]),
            ReconciledReviewers {
                pendings: strings(&["a"]),
                ..Default::default()
            }
        );
    }

    #[test]
    fn sets_are_disjoint_and_bounded() {
        let requests = vec![request("a"), request("b"), request("c")];
        let reviews = vec![
            review("a", GhReviewState::Approved, T1),
            review("b", GhReviewState::ChangesRequested, T1),
            review("d", GhReviewState::Commented, T2),
            review("e", GhReviewState::Approved, T2),
            review("b", GhReviewState::Approved, T3),
            review("e", GhReviewState::ChangesRequested, T3),
        ];

        let reconciled = reconcile(&requests, &reviews);
        let all: Vec<&String> = reconciled
            .approvals
            .iter()
            .chain(reconciled.change_requesteds.iter())
            .chain(reconciled.pendings.iter())
            .collect();
        let unique: HashSet<&String> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());

        let known: HashSet<String> = requests
            .iter()
            .map(|r| r.requested_reviewer.login.clone())
            .chain(reviews.iter().map(|r| r.author.login.clone()))
            .collect();
        assert!(unique.iter().all(|login| known.contains(*login)));

        assert_eq!(
            reconciled,
            ReconciledReviewers {
                approvals: strings(&["a", "b"]),
                change_requesteds: strings(&["e"]),
                pendings: strings(&["c"]),
            }
        );
    }
}
