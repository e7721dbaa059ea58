//! Notifier core.
//!
//! Reconciles the review state of a pull request and keeps a single chat status message per
//! pull request up to date.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

pub mod accounts;
mod context;
pub mod errors;
pub mod events;
pub mod renderers;
pub mod use_cases;

pub use accounts::ChatAccounts;
pub use context::CoreContext;
pub use errors::{CoreError, Result};
use shaku::module;
use use_cases::{
    events::{handle_event::HandleEvent, notify_deploy_complete::NotifyDeployComplete},
    pulls::{
        fetch_pull_request::FetchPullRequest,
        resolve_pull_request_number::ResolvePullRequestNumber,
    },
    threads::{find_thread::FindThread, post_status_message::PostStatusMessage},
};

module! {
    pub CoreModule {
        components = [
            FetchPullRequest, FindThread, HandleEvent,
            NotifyDeployComplete, PostStatusMessage, ResolvePullRequestNumber
        ],
        providers = []
    }
}
