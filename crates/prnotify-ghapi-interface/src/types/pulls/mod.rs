mod merge_commit;
mod mergeable_state;
mod pull_request_action;
mod pull_request_event;
mod pull_request_record;
mod pull_request_state;
mod pull_request_summary;

pub use merge_commit::GhMergeCommit;
pub use mergeable_state::GhMergeableState;
pub use pull_request_action::GhPullRequestAction;
pub use pull_request_event::{GhPullRequestEvent, GhPullRequestShort};
pub use pull_request_record::GhPullRequestRecord;
pub use pull_request_state::GhPullRequestState;
pub use pull_request_summary::GhPullRequestSummary;
