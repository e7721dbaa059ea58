//! GitHub adapter

use async_trait::async_trait;
use prnotify_config::Config;
use prnotify_ghapi_interface::{
    types::{GhPullRequestRecord, GhPullRequestSummary},
    ApiService, Result,
};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
    graphql::{
        GraphQlResponse, PullRequestData, PullRequestListData, PULL_REQUEST_LIST_QUERY,
        PULL_REQUEST_QUERY,
    },
};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        get_authenticated_client_builder(&self.config)?
            .build()
            .map_err(GitHubError::from)
    }

    async fn graphql<V: Serialize, T: DeserializeOwned>(
        &self,
        query: &str,
        variables: V,
    ) -> Result<GraphQlResponse<T>, GitHubError> {
        Ok(self
            .get_client()?
            .post(build_github_url(&self.config, "/graphql"))
            .json(&json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?
            .error_for_status()?
            .json::<GraphQlResponse<T>>()
            .await?)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), fields(owner, name, pr_number))]
    async fn pulls_get(
        &self,
        owner: &str,
        name: &str,
        pr_number: u64,
    ) -> Result<GhPullRequestRecord> {
        let response: GraphQlResponse<PullRequestData> = self
            .graphql(
                PULL_REQUEST_QUERY,
                json!({
                    "owner": owner,
                    "name": name,
                    "number": pr_number,
                }),
            )
            .await?;

        let not_found = || GitHubError::NotFound {
            pr_number,
            repository_path: format!("{owner}/{name}"),
        };

        if response.has_not_found_error() {
            return Err(not_found().into());
        }

        if !response.errors.is_empty() {
            return Err(GitHubError::GraphQlError {
                messages: response.error_messages(),
            }
            .into());
        }

        response
            .data
            .and_then(PullRequestData::into_record)
            .ok_or_else(|| not_found().into())
    }

    #[tracing::instrument(skip(self), fields(owner, name))]
    async fn pulls_list_recent(&self, owner: &str, name: &str) -> Result<Vec<GhPullRequestSummary>> {
        let response: GraphQlResponse<PullRequestListData> = self
            .graphql(
                PULL_REQUEST_LIST_QUERY,
                json!({
                    "owner": owner,
                    "name": name,
                }),
            )
            .await?;

        if !response.errors.is_empty() {
            return Err(GitHubError::GraphQlError {
                messages: response.error_messages(),
            }
            .into());
        }

        Ok(response
            .data
            .map(PullRequestListData::into_summaries)
            .unwrap_or_default())
    }
}
