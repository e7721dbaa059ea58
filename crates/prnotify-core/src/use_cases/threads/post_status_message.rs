use async_trait::async_trait;
use prnotify_chat_interface::types::OutgoingMessage;
use prnotify_ghapi_interface::types::GhPullRequestRecord;
use serde::Serialize;
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::{find_thread::ThreadHandle, utils::marker::thread_marker, FindThreadInterface};
use crate::{renderers::StatusRenderer, CoreContext, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ThreadWrite {
    Posted(ThreadHandle),
    Updated(ThreadHandle),
}

impl ThreadWrite {
    pub fn handle(&self) -> &ThreadHandle {
        match self {
            Self::Posted(handle) | Self::Updated(handle) => handle,
        }
    }
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PostStatusMessageInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pull_request: &'a GhPullRequestRecord,
    ) -> Result<ThreadWrite>;
}

/// Post the status message of a pull request, or update it in place when it exists.
#[derive(Component)]
#[shaku(interface = PostStatusMessageInterface)]
pub(crate) struct PostStatusMessage;

#[async_trait]
impl PostStatusMessageInterface for PostStatusMessage {
    #[tracing::instrument(skip_all, fields(pr_number = pull_request.number))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pull_request: &'a GhPullRequestRecord,
    ) -> Result<ThreadWrite> {
        let status = StatusRenderer::new(ctx.accounts, &ctx.config.empty_body_warning)
            .render(pull_request);
        let message = OutgoingMessage {
            text: status.text,
            blocks: status.blocks,
            metadata: Some(thread_marker(&ctx.config.repository, pull_request.number)),
        };

        let find_thread: &dyn FindThreadInterface = ctx.core_module.resolve_ref();
        match find_thread.run(ctx, pull_request.number).await? {
            Some(handle) => {
                let ts = ctx
                    .chat_service
                    .messages_update(ctx.channel(), &handle.ts, &message)
                    .await?;

                info!(
                    pr_number = pull_request.number,
                    ts = %ts,
                    message = "Updated status message"
                );

                Ok(ThreadWrite::Updated(ThreadHandle {
                    ts,
                    pr_number: pull_request.number,
                }))
            }
            None => {
                let ts = ctx
                    .chat_service
                    .messages_post(ctx.channel(), &message)
                    .await?;

                info!(
                    pr_number = pull_request.number,
                    ts = %ts,
                    message = "Posted status message"
                );

                Ok(ThreadWrite::Posted(ThreadHandle {
                    ts,
                    pr_number: pull_request.number,
                }))
            }
        }
    }
}
