use anyhow::anyhow;
use async_trait::async_trait;
use clap::Parser;
use prnotify_core::{renderers::StatusRenderer, use_cases::pulls::FetchPullRequestInterface};
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show the status message of a pull request without posting it
#[derive(Parser)]
pub(crate) struct ShowCommand {
    /// Pull request number
    number: u64,
}

#[async_trait]
impl Command for ShowCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let fetch_pull_request: &dyn FetchPullRequestInterface = ctx.core_module.resolve_ref();
        let pull_request = fetch_pull_request
            .run(&ctx.as_core_context(), self.number)
            .await?
            .ok_or_else(|| {
                anyhow!(
                    "Pull request #{} not found on repository '{}'.",
                    self.number,
                    ctx.config.repository
                )
            })?;

        let message = StatusRenderer::new(&ctx.accounts, &ctx.config.empty_body_warning)
            .render(&pull_request);

        writeln!(
            ctx.writer.write().await,
            "{}",
            serde_json::to_string_pretty(&message)?
        )?;

        Ok(())
    }
}
