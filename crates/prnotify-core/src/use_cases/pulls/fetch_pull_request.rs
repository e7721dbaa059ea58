use async_trait::async_trait;
use prnotify_ghapi_interface::{types::GhPullRequestRecord, ApiError};
use shaku::{Component, Interface};
use tracing::info;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait FetchPullRequestInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_number: u64,
    ) -> Result<Option<GhPullRequestRecord>>;
}

/// Fetch the current pull request snapshot, `None` when it does not exist upstream.
#[derive(Component)]
#[shaku(interface = FetchPullRequestInterface)]
pub(crate) struct FetchPullRequest;

#[async_trait]
impl FetchPullRequestInterface for FetchPullRequest {
    #[tracing::instrument(skip(self, ctx), fields(pr_number))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_number: u64,
    ) -> Result<Option<GhPullRequestRecord>> {
        let (repo_owner, repo_name) = ctx.repository()?;

        match ctx
            .api_service
            .pulls_get(repo_owner, repo_name, pr_number)
            .await
        {
            Ok(pull_request) => Ok(Some(pull_request)),
            Err(ApiError::NotFound { .. }) => {
                info!(
                    repo_owner = repo_owner,
                    repo_name = repo_name,
                    pr_number = pr_number,
                    message = "Pull request not found"
                );

                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use prnotify_ghapi_interface::MockApiService;

    use super::*;
    use crate::{context::tests::CoreContextTest, CoreError};

    #[tokio::test]
    async fn found() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();

            svc.expect_pulls_get()
                .once()
                .withf(|owner, name, number| owner == "me" && name == "test" && number == &1)
                .return_once(|_, _, _| {
                    Ok(GhPullRequestRecord {
                        number: 1,
                        ..Default::default()
                    })
                });

            svc
        };

        let pr = FetchPullRequest.run(&ctx.as_context(), 1).await.unwrap();
        assert_eq!(pr.map(|pr| pr.number), Some(1));
    }

    #[tokio::test]
    async fn not_found() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();

            svc.expect_pulls_get().once().return_once(|_, _, _| {
                Err(ApiError::NotFound {
                    pr_number: 1,
                    repository_path: "me/test".into(),
                })
            });

            svc
        };

        assert!(FetchPullRequest
            .run(&ctx.as_context(), 1)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn upstream_failure() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();

            svc.expect_pulls_get().once().return_once(|_, _, _| {
                Err(ApiError::ImplementationError {
                    source: "boom".into(),
                })
            });

            svc
        };

        assert!(matches!(
            FetchPullRequest.run(&ctx.as_context(), 1).await,
            Err(CoreError::ApiError { .. })
        ));
    }

    #[tokio::test]
    async fn invalid_repository() {
        let mut ctx = CoreContextTest::new();
        ctx.config.repository = "invalid".into();

        assert!(matches!(
            FetchPullRequest.run(&ctx.as_context(), 1).await,
            Err(CoreError::InvalidRepository { repository }) if repository == "invalid"
        ));
    }
}
