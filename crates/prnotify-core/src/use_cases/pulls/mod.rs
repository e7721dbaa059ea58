pub(crate) mod fetch_pull_request;
pub(crate) mod resolve_pull_request_number;
pub mod utils;

pub use fetch_pull_request::FetchPullRequestInterface;
pub use resolve_pull_request_number::ResolvePullRequestNumberInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    fetch_pull_request::MockFetchPullRequestInterface,
    resolve_pull_request_number::MockResolvePullRequestNumberInterface,
};
