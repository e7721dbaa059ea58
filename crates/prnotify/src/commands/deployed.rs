use async_trait::async_trait;
use clap::Parser;
use prnotify_core::use_cases::events::NotifyDeployCompleteInterface;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Announce that the workflow launched by a merge commit is complete
#[derive(Parser)]
pub(crate) struct DeployedCommand {
    /// Merge commit SHA
    #[arg(long, env = "GITHUB_SHA")]
    sha: String,

    /// Login of the user who pushed the merge commit
    #[arg(long, env = "GITHUB_ACTOR")]
    sender: String,

    /// Push message, shown in bold when set
    #[arg(long, default_value = "")]
    message: String,
}

#[async_trait]
impl Command for DeployedCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let notify_deploy_complete: &dyn NotifyDeployCompleteInterface =
            ctx.core_module.resolve_ref();
        let outcome = notify_deploy_complete
            .run(
                &ctx.as_core_context(),
                &self.sha,
                &self.sender,
                &self.message,
            )
            .await?;

        writeln!(ctx.writer.write().await, "{}", outcome)?;

        Ok(())
    }
}
