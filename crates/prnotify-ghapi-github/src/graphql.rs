//! GraphQL queries and response shapes.

use prnotify_ghapi_interface::types::{
    GhActor, GhMergeCommit, GhMergeableState, GhPullRequestRecord, GhPullRequestState,
    GhPullRequestSummary, GhRepositoryInfo, GhRequestedReviewer, GhRequestedReviewerKind,
    GhReview, GhReviewRequest, GhReviewState,
};
use serde::Deserialize;
use time::OffsetDateTime;

pub(crate) const PULL_REQUEST_LIST_QUERY: &str = r#"
query ($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    pullRequests(last: 100) {
      nodes {
        number
        mergeCommit {
          messageHeadline
          messageBody
          sha: oid
        }
      }
    }
  }
}
"#;

pub(crate) const PULL_REQUEST_QUERY: &str = r#"
query ($owner: String!, $name: String!, $number: Int!) {
  repository(owner: $owner, name: $name) {
    name
    url
    owner {
      login
      url
    }
    pullRequest(number: $number) {
      number
      title
      body
      url
      state
      merged
      mergeable
      author {
        login
        url
      }
      baseRefName
      headRefName
      changedFiles
      commits {
        totalCount
      }
      mergeCommit {
        messageHeadline
        messageBody
        sha: oid
      }
      reviewRequests(last: 100) {
        nodes {
          requestedReviewer {
            __typename
            ... on User {
              login
              url
            }
            ... on Team {
              login: name
              url
            }
          }
        }
      }
      reviews(last: 100) {
        nodes {
          author {
            login
            url
          }
          body
          state
          updatedAt
        }
      }
    }
  }
}
"#;

const GHOST_LOGIN: &str = "ghost";

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl<T> GraphQlResponse<T> {
    pub fn has_not_found_error(&self) -> bool {
        self.errors
            .iter()
            .any(|e| e.kind.as_deref() == Some("NOT_FOUND"))
    }

    pub fn error_messages(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Deserialize)]
struct Nodes<T> {
    nodes: Vec<Option<T>>,
}

impl<T> Nodes<T> {
    fn into_inner(self) -> impl Iterator<Item = T> {
        self.nodes.into_iter().flatten()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TotalCount {
    total_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MergeCommitNode {
    message_headline: String,
    message_body: String,
    sha: String,
}

impl From<MergeCommitNode> for GhMergeCommit {
    fn from(node: MergeCommitNode) -> Self {
        Self {
            headline: node.message_headline,
            body: node.message_body,
            sha: node.sha,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "__typename")]
enum RequestedReviewerNode {
    User { login: String, url: String },
    Team { login: String, url: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewRequestNode {
    requested_reviewer: Option<RequestedReviewerNode>,
}

impl ReviewRequestNode {
    fn into_review_request(self) -> Option<GhReviewRequest> {
        let (login, url, kind) = match self.requested_reviewer? {
            RequestedReviewerNode::User { login, url } => {
                (login, url, GhRequestedReviewerKind::User)
            }
            RequestedReviewerNode::Team { login, url } => {
                (login, url, GhRequestedReviewerKind::Team)
            }
            RequestedReviewerNode::Other => return None,
        };

        Some(GhReviewRequest {
            requested_reviewer: GhRequestedReviewer { login, url, kind },
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewNode {
    author: Option<GhActor>,
    body: Option<String>,
    state: GhReviewState,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl From<ReviewNode> for GhReview {
    fn from(node: ReviewNode) -> Self {
        Self {
            author: node.author.unwrap_or_else(|| GhActor::from_login(GHOST_LOGIN)),
            body: node.body,
            state: node.state,
            updated_at: node.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestNode {
    number: u64,
    title: String,
    body: Option<String>,
    url: String,
    state: GhPullRequestState,
    merged: bool,
    mergeable: GhMergeableState,
    author: Option<GhActor>,
    base_ref_name: String,
    head_ref_name: String,
    changed_files: u64,
    commits: TotalCount,
    merge_commit: Option<MergeCommitNode>,
    review_requests: Nodes<ReviewRequestNode>,
    reviews: Nodes<ReviewNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryNode {
    name: String,
    url: String,
    owner: GhActor,
    pull_request: Option<PullRequestNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PullRequestData {
    repository: Option<RepositoryNode>,
}

impl PullRequestData {
    /// Flatten the GraphQL shape, `None` when the pull request is missing.
    pub fn into_record(self) -> Option<GhPullRequestRecord> {
        let repository = self.repository?;
        let pr = repository.pull_request?;

        Some(GhPullRequestRecord {
            number: pr.number,
            title: pr.title,
            body: pr.body,
            url: pr.url,
            state: pr.state,
            merged: pr.merged,
            mergeable: pr.mergeable,
            author: pr
                .author
                .unwrap_or_else(|| GhActor::from_login(GHOST_LOGIN)),
            base_ref_name: pr.base_ref_name,
            head_ref_name: pr.head_ref_name,
            commits_count: pr.commits.total_count,
            changed_files: pr.changed_files,
            merge_commit: pr.merge_commit.map(Into::into),
            review_requests: pr
                .review_requests
                .into_inner()
                .filter_map(ReviewRequestNode::into_review_request)
                .collect(),
            reviews: pr.reviews.into_inner().map(Into::into).collect(),
            repository: GhRepositoryInfo {
                name: repository.name,
                url: repository.url,
                owner: repository.owner,
            },
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestSummaryNode {
    number: u64,
    merge_commit: Option<MergeCommitNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestListRepositoryNode {
    pull_requests: Nodes<PullRequestSummaryNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PullRequestListData {
    repository: Option<PullRequestListRepositoryNode>,
}

impl PullRequestListData {
    pub fn into_summaries(self) -> Vec<GhPullRequestSummary> {
        self.repository
            .map(|r| {
                r.pull_requests
                    .into_inner()
                    .map(|pr| GhPullRequestSummary {
                        number: pr.number,
                        merge_commit: pr.merge_commit.map(Into::into),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    use super::*;

    const PULL_REQUEST_RESPONSE: &str = r#"{
      "data": {
        "repository": {
          "name": "test",
          "url": "https://github.com/me/test",
          "owner": {"login": "me", "url": "https://github.com/me"},
          "pullRequest": {
            "number": 12,
            "title": "Add things",
            "body": "Some body",
            "url": "https://github.com/me/test/pull/12",
            "state": "OPEN",
            "merged": false,
            "mergeable": "CONFLICTING",
            "author": {"login": "author", "url": "https://github.com/author"},
            "baseRefName": "main",
            "headRefName": "feature/things",
            "changedFiles": 3,
            "commits": {"totalCount": 2},
            "mergeCommit": null,
            "reviewRequests": {
              "nodes": [
                {"requestedReviewer": {"__typename": "User", "login": "alice", "url": "https://github.com/alice"}},
                {"requestedReviewer": {"__typename": "Team", "login": "core", "url": "https://github.com/orgs/me/teams/core"}},
                {"requestedReviewer": {"__typename": "Mannequin"}},
                {"requestedReviewer": null}
              ]
            },
            "reviews": {
              "nodes": [
                {"author": {"login": "bob", "url": "https://github.com/bob"}, "body": "", "state": "APPROVED", "updatedAt": "2024-03-01T10:00:00Z"},
                {"author": null, "body": "hmm", "state": "COMMENTED", "updatedAt": "2024-03-02T10:00:00Z"}
              ]
            }
          }
        }
      }
    }"#;

    #[test]
    fn parse_pull_request_response() {
        let response: GraphQlResponse<PullRequestData> =
            serde_json::from_str(PULL_REQUEST_RESPONSE).unwrap();
        assert!(response.errors.is_empty());

        let record = response.data.unwrap().into_record().unwrap();
        assert_eq!(record.number, 12);
        assert_eq!(record.state, GhPullRequestState::Open);
        assert_eq!(record.mergeable, GhMergeableState::Conflicting);
        assert_eq!(record.commits_count, 2);
        assert_eq!(record.changed_files, 3);
        assert_eq!(record.repository.owner.login, "me");
        assert_eq!(
            record.review_requests,
            vec![
                GhReviewRequest::for_user("alice"),
                GhReviewRequest {
                    requested_reviewer: GhRequestedReviewer {
                        login: "core".into(),
                        url: "https://github.com/orgs/me/teams/core".into(),
                        kind: GhRequestedReviewerKind::Team,
                    }
                },
            ]
        );
        assert_eq!(
            record.reviews,
            vec![
                GhReview {
                    author: GhActor::from_login("bob"),
                    body: Some(String::new()),
                    state: GhReviewState::Approved,
                    updated_at: datetime!(2024-03-01 10:00:00 UTC),
                },
                GhReview {
                    author: GhActor::from_login("ghost"),
                    body: Some("hmm".into()),
                    state: GhReviewState::Commented,
                    updated_at: datetime!(2024-03-02 10:00:00 UTC),
                }
            ]
        );
    }

    #[test]
    fn parse_missing_pull_request_response() {
        let response: GraphQlResponse<PullRequestData> = serde_json::from_str(
            r#"{
              "data": {"repository": {"name": "test", "url": "u", "owner": {"login": "me", "url": "u"}, "pullRequest": null}},
              "errors": [{"type": "NOT_FOUND", "message": "Could not resolve to a PullRequest with the number of 999."}]
            }"#,
        )
        .unwrap();

        assert!(response.has_not_found_error());
        assert!(response.data.unwrap().into_record().is_none());
    }

    #[test]
    fn parse_pull_request_list_response() {
        let response: GraphQlResponse<PullRequestListData> = serde_json::from_str(
            r#"{
              "data": {"repository": {"pullRequests": {"nodes": [
                {"number": 1, "mergeCommit": null},
                {"number": 2, "mergeCommit": {"messageHeadline": "Merge #2", "messageBody": "", "sha": "abc"}}
              ]}}}
            }"#,
        )
        .unwrap();

        assert_eq!(
            response.data.unwrap().into_summaries(),
            vec![
                GhPullRequestSummary {
                    number: 1,
                    merge_commit: None
                },
                GhPullRequestSummary {
                    number: 2,
                    merge_commit: Some(GhMergeCommit {
                        headline: "Merge #2".into(),
                        body: String::new(),
                        sha: "abc".into()
                    })
                },
            ]
        );
    }
}
