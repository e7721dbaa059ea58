use prnotify_chat_interface::types::{ChatMessage, ChatMessageMetadata};
use serde::{Deserialize, Serialize};

pub const THREAD_EVENT_TYPE: &str = "prnotify_pull_request";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct ThreadMarkerPayload {
    repository: String,
    number: u64,
}

/// Metadata identifying the status message of a pull request.
pub fn thread_marker(repository: &str, pr_number: u64) -> ChatMessageMetadata {
    ChatMessageMetadata {
        event_type: THREAD_EVENT_TYPE.into(),
        event_payload: serde_json::json!({
            "repository": repository,
            "number": pr_number,
        }),
    }
}

/// Is this message the status message of the pull request?
///
/// Messages without metadata are matched on their breadcrumb link.
pub fn is_thread_message(message: &ChatMessage, repository: &str, pr_number: u64) -> bool {
    if !message.is_bot_authored() {
        return false;
    }

    match &message.metadata {
        Some(metadata) if metadata.event_type == THREAD_EVENT_TYPE => {
            serde_json::from_value::<ThreadMarkerPayload>(metadata.event_payload.clone())
                .map(|payload| payload.repository == repository && payload.number == pr_number)
                .unwrap_or(false)
        }
        Some(_) => false,
        None => message
            .text
            .contains(&format!("/{repository}/pull/{pr_number}|{pr_number}>")),
    }
}
