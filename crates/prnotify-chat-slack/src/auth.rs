//! Auth.

use std::time::Duration;

use http::{header, HeaderMap};
use prnotify_config::Config;
use reqwest::ClientBuilder;

use crate::errors::SlackError;

/// Get an authenticated Slack client builder.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, SlackError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", config.chat.slack.token))?,
    );

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.chat.slack.connect_timeout))
        .user_agent(format!("{}/{}", config.name, config.version))
        .default_headers(headers))
}

/// Build a Slack Web API method URL.
pub fn build_slack_url(config: &Config, method: &str) -> String {
    format!(
        "{}/{}",
        config.chat.slack.root_url.trim_end_matches('/'),
        method
    )
}
