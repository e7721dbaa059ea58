use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::info;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ResolvePullRequestNumberInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        explicit_number: u64,
        merge_commit_sha: Option<String>,
    ) -> Result<u64>;
}

/// Find the pull request targeted by an event.
///
/// A non-zero explicit number wins. Otherwise the merge commit sha is looked up among the
/// last 100 pull requests. Zero means not found.
#[derive(Component)]
#[shaku(interface = ResolvePullRequestNumberInterface)]
pub(crate) struct ResolvePullRequestNumber;

#[async_trait]
impl ResolvePullRequestNumberInterface for ResolvePullRequestNumber {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        explicit_number: u64,
        merge_commit_sha: Option<String>,
    ) -> Result<u64> {
        if explicit_number > 0 {
            return Ok(explicit_number);
        }

        let sha = match merge_commit_sha.as_deref() {
            Some(sha) if !sha.is_empty() => sha,
            _ => return Ok(0),
        };

        let (repo_owner, repo_name) = ctx.repository()?;
        let number = ctx
            .api_service
            .pulls_list_recent(repo_owner, repo_name)
            .await?
            .into_iter()
            .find(|pr| pr.merge_commit.as_ref().map(|c| c.sha.as_str()) == Some(sha))
            .map(|pr| pr.number)
            .unwrap_or(0);

        if number > 0 {
            info!(
                pr_number = number,
                sha = sha,
                message = "Found pull request from merge commit"
            );
        }

        Ok(number)
    }
}

#[cfg(test)]
mod tests {
    use prnotify_ghapi_interface::{
        types::{GhMergeCommit, GhPullRequestSummary},
        MockApiService,
    };

    use super::*;
    use crate::context::tests::CoreContextTest;

    fn summaries() -> Vec<GhPullRequestSummary> {
        vec![
            GhPullRequestSummary {
                number: 1,
                merge_commit: None,
            },
            GhPullRequestSummary {
                number: 2,
                merge_commit: Some(GhMergeCommit {
                    sha: "abcdef".into(),
                    ..Default::default()
                }),
            },
            GhPullRequestSummary {
                number: 3,
                merge_commit: Some(GhMergeCommit {
                    sha: "abc".into(),
                    ..Default::default()
                }),
            },
        ]
    }

    #[tokio::test]
    async fn explicit_number() {
        let ctx = CoreContextTest::new();

        assert_eq!(
            ResolvePullRequestNumber
                .run(&ctx.as_context(), 5, Some("abc".into()))
                .await
                .unwrap(),
            5
        );
    }

    #[tokio::test]
    async fn no_sha() {
        let ctx = CoreContextTest::new();

        assert_eq!(
            ResolvePullRequestNumber
                .run(&ctx.as_context(), 0, None)
                .await
                .unwrap(),
            0
        );
        assert_eq!(
            ResolvePullRequestNumber
                .run(&ctx.as_context(), 0, Some("".into()))
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn exact_sha_match() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();

            svc.expect_pulls_list_recent()
                .times(2)
                .withf(|owner, name| owner == "me" && name == "test")
                .returning(|_, _| Ok(summaries()));

            svc
        };

        assert_eq!(
            ResolvePullRequestNumber
                .run(&ctx.as_context(), 0, Some("abc".into()))
                .await
                .unwrap(),
            3
        );
        assert_eq!(
            ResolvePullRequestNumber
                .run(&ctx.as_context(), 0, Some("fff".into()))
                .await
                .unwrap(),
            0
        );
    }
}
