//! Slack adapter

use async_trait::async_trait;
use prnotify_chat_interface::{
    types::{Block, ChatMessage, ChatMessageMetadata, OutgoingMessage},
    ChatService, Result,
};
use prnotify_config::Config;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    auth::{build_slack_url, get_authenticated_client_builder},
    errors::SlackError,
};

/// Maximum page size accepted by `conversations.history`.
const MAX_HISTORY_LIMIT: u32 = 999;

/// Slack Web API adapter implementation.
#[derive(Clone)]
pub struct SlackChatService {
    config: Config,
}

#[derive(Debug, Deserialize)]
struct SlackResponse<T> {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    body: T,
}

impl<T> SlackResponse<T> {
    fn into_result(self, method: &str) -> Result<T, SlackError> {
        if self.ok {
            Ok(self.body)
        } else {
            Err(SlackError::MethodError {
                method: method.into(),
                error: self.error.unwrap_or_else(|| "unknown_error".into()),
            })
        }
    }
}

#[derive(Debug, Deserialize)]
struct TimestampBody {
    #[serde(default)]
    ts: String,
}

#[derive(Debug, Deserialize)]
struct HistoryBody {
    #[serde(default)]
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    text: &'a str,
    blocks: &'a [Block],
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a ChatMessageMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thread_ts: Option<&'a str>,
}

#[derive(Serialize)]
struct UpdateMessageRequest<'a> {
    channel: &'a str,
    ts: &'a str,
    text: &'a str,
    blocks: &'a [Block],
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a ChatMessageMetadata>,
}

impl SlackChatService {
    /// Creates new Slack API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, SlackError> {
        get_authenticated_client_builder(&self.config)?
            .build()
            .map_err(SlackError::from)
    }

    async fn call<B: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<T, SlackError> {
        self.get_client()?
            .post(build_slack_url(&self.config, method))
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json::<SlackResponse<T>>()
            .await?
            .into_result(method)
    }
}

#[async_trait]
impl ChatService for SlackChatService {
    #[tracing::instrument(skip(self, message), fields(channel))]
    async fn messages_post(&self, channel: &str, message: &OutgoingMessage) -> Result<String> {
        let response: TimestampBody = self
            .call(
                "chat.postMessage",
                &PostMessageRequest {
                    channel,
                    text: &message.text,
                    blocks: &message.blocks,
                    metadata: message.metadata.as_ref(),
                    thread_ts: None,
                },
            )
            .await?;

        Ok(response.ts)
    }

    #[tracing::instrument(skip(self, message), fields(channel, ts))]
    async fn messages_update(
        &self,
        channel: &str,
        ts: &str,
        message: &OutgoingMessage,
    ) -> Result<String> {
        let response: TimestampBody = self
            .call(
                "chat.update",
                &UpdateMessageRequest {
                    channel,
                    ts,
                    text: &message.text,
                    blocks: &message.blocks,
                    metadata: message.metadata.as_ref(),
                },
            )
            .await?;

        Ok(response.ts)
    }

    #[tracing::instrument(skip(self, blocks), fields(channel, thread_ts))]
    async fn thread_replies_post(
        &self,
        channel: &str,
        thread_ts: &str,
        blocks: &[Block],
    ) -> Result<String> {
        let text = blocks
            .iter()
            .map(Block::text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        let response: TimestampBody = self
            .call(
                "chat.postMessage",
                &PostMessageRequest {
                    channel,
                    text: &text,
                    blocks,
                    metadata: None,
                    thread_ts: Some(thread_ts),
                },
            )
            .await?;

        Ok(response.ts)
    }

    #[tracing::instrument(skip(self), fields(channel, limit))]
    async fn messages_history(&self, channel: &str, limit: u32) -> Result<Vec<ChatMessage>> {
        let limit = limit.clamp(1, MAX_HISTORY_LIMIT).to_string();

        let response = self
            .get_client()?
            .get(build_slack_url(&self.config, "conversations.history"))
            .query(&[
                ("channel", channel),
                ("limit", limit.as_str()),
                ("include_all_metadata", "true"),
            ])
            .send()
            .await
            .map_err(SlackError::from)?
            .error_for_status()
            .map_err(SlackError::from)?
            .json::<SlackResponse<HistoryBody>>()
            .await
            .map_err(SlackError::from)?
            .into_result("conversations.history")?;

        Ok(response.messages)
    }
}
