use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};

use super::handle_event::{NotifyOutcome, SkipReason};
use crate::{
    renderers::NarrativeRenderer,
    use_cases::{
        pulls::{FetchPullRequestInterface, ResolvePullRequestNumberInterface},
        threads::PostStatusMessageInterface,
    },
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait NotifyDeployCompleteInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        sha: &'a str,
        sender: &'a str,
        push_message: &'a str,
    ) -> Result<NotifyOutcome>;
}

/// Refresh the status message of the pull request merged by a commit, then note that the
/// workflow it triggered is complete.
#[derive(Component)]
#[shaku(interface = NotifyDeployCompleteInterface)]
pub(crate) struct NotifyDeployComplete;

#[async_trait]
impl NotifyDeployCompleteInterface for NotifyDeployComplete {
    #[tracing::instrument(skip(self, ctx, push_message))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        sha: &'a str,
        sender: &'a str,
        push_message: &'a str,
    ) -> Result<NotifyOutcome> {
        let resolve_number: &dyn ResolvePullRequestNumberInterface =
            ctx.core_module.resolve_ref();
        let pr_number = resolve_number.run(ctx, 0, Some(sha.into())).await?;
        if pr_number == 0 {
            return Ok(NotifyOutcome::Skipped(SkipReason::NotFound));
        }

        let fetch_pull_request: &dyn FetchPullRequestInterface = ctx.core_module.resolve_ref();
        let pull_request = match fetch_pull_request.run(ctx, pr_number).await? {
            Some(pull_request) => pull_request,
            None => return Ok(NotifyOutcome::Skipped(SkipReason::NotFound)),
        };

        let post_status_message: &dyn PostStatusMessageInterface = ctx.core_module.resolve_ref();
        let write = post_status_message.run(ctx, &pull_request).await?;

        let blocks =
            NarrativeRenderer::new(ctx.accounts).deploy_complete(sender, sha, push_message);
        ctx.chat_service
            .thread_replies_post(ctx.channel(), &write.handle().ts, &blocks)
            .await?;

        Ok(write.into())
    }
}
