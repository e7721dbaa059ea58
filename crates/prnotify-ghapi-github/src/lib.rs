//! API crate.
//!
//! Contains functions to communicate with the GitHub GraphQL API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod auth;
mod errors;
mod github;
mod graphql;

pub use errors::GitHubError;
pub use github::GithubApiService;
