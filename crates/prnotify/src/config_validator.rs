//! Validation utilities.

use std::{fmt::Write, path::Path};

use prnotify_config::{ChatDriver, Config, DriverError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push('\n');
        let _ = write!(error, "  - Invalid env. var.: {} ({})", name, reason);
    }

    let mut error = String::new();

    if config.name.is_empty() {
        _missing(&mut error, "PRNOTIFY_NAME");
    }

    // Check repository: explicit or from the Actions environment
    if config.repository.is_empty() {
        _missing(&mut error, "PRNOTIFY_REPOSITORY");
    } else if config.repository_components().is_none() {
        _invalid(&mut error, "PRNOTIFY_REPOSITORY", "expected 'owner/name'");
    }

    if config.api.github.token.is_empty() {
        _missing(&mut error, "PRNOTIFY_API_GITHUB_TOKEN");
    }

    if config.chat.channel.is_empty() {
        _missing(&mut error, "PRNOTIFY_CHAT_CHANNEL");
    }

    match &config.chat.driver {
        Ok(ChatDriver::Slack) if config.chat.slack.token.is_empty() => {
            _missing(&mut error, "PRNOTIFY_CHAT_SLACK_TOKEN");
        }
        Err(DriverError::InvalidDriverKind { kind }) => {
            _invalid(
                &mut error,
                "PRNOTIFY_CHAT_DRIVER",
                &format!("unknown driver '{kind}', expected 'slack' or 'null'"),
            );
        }
        _ => (),
    }

    if !config.chat.accounts_path.is_empty() && !Path::new(&config.chat.accounts_path).is_file() {
        _invalid(&mut error, "PRNOTIFY_CHAT_ACCOUNTS_PATH", "file not found");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
