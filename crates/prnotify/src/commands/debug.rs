//! Debug commands.

use anyhow::anyhow;
use async_trait::async_trait;
use clap::Subcommand;
use prnotify_sentry::send_test_event;

use super::{Command, CommandContext};
use crate::Result;

/// Debug related commands
#[derive(Subcommand)]
pub(crate) enum DebugCommand {
    /// Send a test message to Sentry
    TestSentry {
        /// Custom message, defaults to "This is a test"
        message: Option<String>,
    },
}

#[async_trait]
impl Command for DebugCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::TestSentry { message } => {
                if ctx.config.sentry.url.is_empty() {
                    return Err(anyhow!("Sentry URL is not configured."));
                }

                let event_id = send_test_event(message);
                writeln!(ctx.writer.write().await, "Sent test event {}", event_id)?;

                Ok(())
            }
        }
    }
}
