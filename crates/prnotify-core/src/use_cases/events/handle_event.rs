use std::fmt::Display;

use async_trait::async_trait;
use prnotify_chat_interface::types::Block;
use serde::Serialize;
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::utils::dispatcher::{classify, NarrativeKind};
use crate::{
    events::InboundEvent,
    renderers::NarrativeRenderer,
    use_cases::{
        pulls::{FetchPullRequestInterface, ResolvePullRequestNumberInterface},
        threads::{PostStatusMessageInterface, ThreadHandle, ThreadWrite},
    },
    CoreContext, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Event type or action without a narrative.
    Unsupported,
    /// No pull request matches the event.
    NotFound,
}

/// Result of a notification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NotifyOutcome {
    Skipped(SkipReason),
    Posted(ThreadHandle),
    Updated(ThreadHandle),
}

impl From<ThreadWrite> for NotifyOutcome {
    fn from(write: ThreadWrite) -> Self {
        match write {
            ThreadWrite::Posted(handle) => Self::Posted(handle),
            ThreadWrite::Updated(handle) => Self::Updated(handle),
        }
    }
}

impl Display for NotifyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skipped(SkipReason::Unsupported) => write!(f, "Skipped: unsupported event"),
            Self::Skipped(SkipReason::NotFound) => write!(f, "Skipped: pull request not found"),
            Self::Posted(handle) => write!(
                f,
                "Posted status message {} for pull request #{}",
                handle.ts, handle.pr_number
            ),
            Self::Updated(handle) => write!(
                f,
                "Updated status message {} for pull request #{}",
                handle.ts, handle.pr_number
            ),
        }
    }
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleEventInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &'a InboundEvent,
    ) -> Result<NotifyOutcome>;
}

#[derive(Component)]
#[shaku(interface = HandleEventInterface)]
pub(crate) struct HandleEvent;

#[async_trait]
impl HandleEventInterface for HandleEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            event_type = %event.event_type,
            action = %event.action,
            pr_number = event.pull_request_number
        )
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &'a InboundEvent,
    ) -> Result<NotifyOutcome> {
        let kind = match classify(&event.event_type, &event.action) {
            Some(kind) => kind,
            None => {
                info!(
                    event_type = %event.event_type,
                    action = %event.action,
                    message = "Unsupported trigger, ignoring"
                );
                return Ok(NotifyOutcome::Skipped(SkipReason::Unsupported));
            }
        };

        let resolve_number: &dyn ResolvePullRequestNumberInterface =
            ctx.core_module.resolve_ref();
        let pr_number = resolve_number
            .run(ctx, event.pull_request_number, None)
            .await?;
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

        let renderer = NarrativeRenderer::new(ctx.accounts);
        let narrative: Option<Vec<Block>> = match kind {
            NarrativeKind::Closed => renderer.closed(&pull_request),
            NarrativeKind::ReviewRequested => {
                renderer.review_requested(&event.action, event.review_request.as_ref())
            }
            NarrativeKind::Submitted => renderer.submitted(&pull_request, event.review.as_ref()),
        };

        if let Some(blocks) = narrative {
            ctx.chat_service
                .thread_replies_post(ctx.channel(), &write.handle().ts, &blocks)
                .await?;
        }

        Ok(write.into())
    }
}
