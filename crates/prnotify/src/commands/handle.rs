use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use clap::Parser;
use prnotify_core::{events::InboundEvent, use_cases::events::HandleEventInterface};
use shaku::HasComponent;
use tracing::info;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Refresh the status message of the pull request targeted by a webhook event
#[derive(Parser)]
pub(crate) struct HandleCommand {
    /// Webhook event name (e.g. 'pull_request')
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    event_name: String,

    /// Path to the webhook event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,
}

#[async_trait]
impl Command for HandleCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let payload = tokio::fs::read_to_string(&self.event_path)
            .await
            .with_context(|| {
                format!(
                    "Could not read event payload '{}'",
                    self.event_path.display()
                )
            })?;
        let event = InboundEvent::from_webhook_payload(&self.event_name, &payload)?;
        info!(
            event_type = %event.event_type,
            action = %event.action,
            pr_number = event.pull_request_number,
            message = "Handling event"
        );

        let handle_event: &dyn HandleEventInterface = ctx.core_module.resolve_ref();
        let outcome = handle_event.run(&ctx.as_core_context(), &event).await?;

        writeln!(ctx.writer.write().await, "{}", outcome)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use prnotify_core::{
        use_cases::{
            events::{MockHandleEventInterface, NotifyOutcome},
            threads::ThreadHandle,
        },
        CoreModule,
    };

    use super::*;
    use crate::testutils::{test_command, try_test_command, CommandContextTest};

    fn write_payload(name: &str, content: &str) -> String {
        let path =
            std::env::temp_dir().join(format!("prnotify-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn handle_unsupported_event() {
        let path = write_payload("unsupported", r#"{"action": "created"}"#);

        let output = test_command(
            CommandContextTest::new(),
            &[
                "handle",
                "--event-name",
                "issue_comment",
                "--event-path",
                path.as_str(),
            ],
        )
        .await;

        assert_eq!(output, "Skipped: unsupported event\n");
    }

    #[tokio::test]
    async fn handle_review_requested_event() {
        let path = write_payload(
            "review-requested",
            r#"{
                "action": "review_requested",
                "number": 12,
                "pull_request": {"number": 12, "title": "Add things"},
                "requested_reviewer": {"login": "alice", "html_url": "https://github.com/alice"},
                "repository": {"name": "test", "full_name": "me/test", "owner": {"login": "me"}},
                "sender": {"login": "author"}
            }"#,
        );

        let mut ctx = CommandContextTest::new();
        ctx.core_module = {
            let mut handle_event = MockHandleEventInterface::new();
            handle_event
                .expect_run()
                .once()
                .withf(|_, event| {
                    event.event_type == "pull_request"
                        && event.action == "review_requested"
                        && event.pull_request_number == 12
                })
                .return_once(|_, _| {
                    Ok(NotifyOutcome::Updated(ThreadHandle {
                        ts: "1700000000.000100".into(),
                        pr_number: 12,
                    }))
                });

            CoreModule::builder()
                .with_component_override::<dyn HandleEventInterface>(Box::new(handle_event))
                .build()
        };

        let output = test_command(
            ctx,
            &[
                "handle",
                "--event-name",
                "pull_request",
                "--event-path",
                path.as_str(),
            ],
        )
        .await;

        assert_eq!(
            output,
            "Updated status message 1700000000.000100 for pull request #12\n"
        );
    }

    #[tokio::test]
    async fn handle_missing_payload() {
        let result = try_test_command(
            CommandContextTest::new(),
            &[
                "handle",
                "--event-name",
                "pull_request",
                "--event-path",
                "/nonexistent/prnotify/event.json",
            ],
        )
        .await;

        assert!(result.is_err());
    }
}
