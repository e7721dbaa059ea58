use async_trait::async_trait;
use serde::Serialize;
use shaku::{Component, Interface};

use super::utils::marker::is_thread_message;
use crate::{CoreContext, Result};

/// Status message of a pull request, used as thread root for change-log replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadHandle {
    pub ts: String,
    pub pr_number: u64,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait FindThreadInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, pr_number: u64)
        -> Result<Option<ThreadHandle>>;
}

#[derive(Component)]
#[shaku(interface = FindThreadInterface)]
pub(crate) struct FindThread;

#[async_trait]
impl FindThreadInterface for FindThread {
    #[tracing::instrument(skip(self, ctx), fields(pr_number), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_number: u64,
    ) -> Result<Option<ThreadHandle>> {
        let repository = &ctx.config.repository;

        Ok(ctx
            .chat_service
            .messages_history(ctx.channel(), ctx.config.chat.history_limit)
            .await?
            .into_iter()
            .find(|message| is_thread_message(message, repository, pr_number))
            .map(|message| ThreadHandle {
                ts: message.ts,
                pr_number,
            }))
    }
}

#[cfg(test)]
mod tests {
    use prnotify_chat_interface::{types::ChatMessage, MockChatService};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::CoreContextTest, use_cases::threads::utils::marker::thread_marker,
    };

    fn history() -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                ts: "5.0".into(),
                bot_id: None,
                text: "<https://github.com/me/test/pull/12|12>".into(),
                metadata: None,
            },
            ChatMessage {
                ts: "4.0".into(),
                bot_id: Some("B01".into()),
                text: String::new(),
                metadata: Some(thread_marker("me/test", 3)),
            },
            ChatMessage {
                ts: "3.0".into(),
                bot_id: Some("B01".into()),
                text: String::new(),
                metadata: Some(thread_marker("me/test", 12)),
            },
            ChatMessage {
                ts: "2.0".into(),
                bot_id: Some("B01".into()),
                text: "<https://github.com/me/test/pull/12|12>".into(),
                metadata: None,
            },
        ]
    }

    #[tokio::test]
    async fn find_most_recent() {
        let mut ctx = CoreContextTest::new();
        ctx.chat_service = {
            let mut svc = MockChatService::new();

            svc.expect_messages_history()
                .times(2)
                .withf(|channel, limit| channel == "C01" && limit == &200)
                .returning(|_, _| Ok(history()));

            svc
        };

        let first = FindThread.run(&ctx.as_context(), 12).await.unwrap();
        let second = FindThread.run(&ctx.as_context(), 12).await.unwrap();

        assert_eq!(
            first,
            Some(ThreadHandle {
                ts: "3.0".into(),
                pr_number: 12
            })
        );
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn not_found() {
        let mut ctx = CoreContextTest::new();
        ctx.chat_service = {
            let mut svc = MockChatService::new();

            svc.expect_messages_history()
                .once()
                .returning(|_, _| Ok(history()));

            svc
        };

        assert_eq!(FindThread.run(&ctx.as_context(), 7).await.unwrap(), None);
    }
}
