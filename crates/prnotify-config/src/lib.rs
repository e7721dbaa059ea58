//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ChatDriver, DriverError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout.
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API personal token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Chat driver, an invalid value is reported by the CLI configuration check.
    pub driver: Result<ChatDriver, DriverError>,
    /// Target channel ID.
    pub channel: String,
    /// How many channel messages are scanned when looking for an existing thread.
    pub history_limit: u32,
    /// Path to the JSON login -> chat account mapping.
    pub accounts_path: String,
    /// Slack options.
    pub slack: ChatSlackConfig,
}

#[derive(Debug, Clone)]
pub struct ChatSlackConfig {
    /// Slack API connect timeout.
    pub connect_timeout: u64,
    /// Slack Web API root URL.
    pub root_url: String,
    /// Slack bot token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Notifier configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot name.
    pub name: String,
    /// Repository path (`owner/name`).
    pub repository: String,
    /// Text shown when a pull request has no description.
    pub empty_body_warning: String,
    /// API options.
    pub api: ApiConfig,
    /// Chat options.
    pub chat: ChatConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            name: env_to_str("PRNOTIFY_NAME", "prnotify"),
            repository: env_to_str("PRNOTIFY_REPOSITORY", &env_to_str("GITHUB_REPOSITORY", "")),
            empty_body_warning: env_to_str(
                "PRNOTIFY_EMPTY_BODY_WARNING",
                "No description provided.",
            ),
            api: ApiConfig {
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("PRNOTIFY_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("PRNOTIFY_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    token: env_to_str("PRNOTIFY_API_GITHUB_TOKEN", ""),
                },
            },
            chat: ChatConfig {
                driver: ChatDriver::from_str(&env_to_str("PRNOTIFY_CHAT_DRIVER", "slack")),
                channel: env_to_str("PRNOTIFY_CHAT_CHANNEL", ""),
                history_limit: env_to_u32("PRNOTIFY_CHAT_HISTORY_LIMIT", 200),
                accounts_path: env_to_str("PRNOTIFY_CHAT_ACCOUNTS_PATH", ""),
                slack: ChatSlackConfig {
                    connect_timeout: env_to_u64("PRNOTIFY_CHAT_SLACK_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("PRNOTIFY_CHAT_SLACK_ROOT_URL", "https://slack.com/api"),
                    token: env_to_str("PRNOTIFY_CHAT_SLACK_TOKEN", ""),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("PRNOTIFY_LOGGING_USE_BUNYAN", false),
            },
            sentry: SentryConfig {
                url: env_to_str("PRNOTIFY_SENTRY_URL", ""),
                traces_sample_rate: env_to_f32("PRNOTIFY_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }

    /// Split the configured repository path into owner and name.
    pub fn repository_components(&self) -> Option<(&str, &str)> {
        match self.repository.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Some((owner, name))
            }
            _ => None,
        }
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}
