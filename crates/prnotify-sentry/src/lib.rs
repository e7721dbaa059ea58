//! Sentry integration.

use std::{future::Future, str::FromStr};

use prnotify_config::Config;
use sentry::{
    integrations::debug_images::DebugImagesIntegration, protocol::Event, types::Dsn,
    ClientOptions, Hub, Level,
};
use tracing::{info, warn};

/// Configure Sentry integration by wrapping a function.
///
/// The client guard lives for the whole call so events raised by the invocation are
/// flushed before returning.
pub async fn with_sentry_configuration<T, Fut, R>(config: &Config, func: T) -> R
where
    T: FnOnce() -> Fut,
    Fut: Future<Output = R>,
{
    let _guard = {
        if config.sentry.url.is_empty() {
            None
        } else {
            match Dsn::from_str(&config.sentry.url) {
                Ok(dsn) => {
                    info!("Sentry integration enabled.");

                    let mut options =
                        ClientOptions::new().add_integration(DebugImagesIntegration::default());

                    options.dsn = Some(dsn);
                    options.default_integrations = true;
                    options.in_app_exclude.push("reqwest");
                    options.in_app_exclude.push("sentry");
                    options.in_app_exclude.push("tokio");
                    options.release = Some(config.version.to_string().into());
                    options.attach_stacktrace = true;
                    options.traces_sample_rate = config.sentry.traces_sample_rate;
                    options.debug = false;

                    Some(sentry::init(options))
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        message = "Invalid Sentry DSN, Sentry integration disabled."
                    );
                    None
                }
            }
        }
    };

    func().await
}

/// Send a test event to Sentry, returning its identifier.
pub fn send_test_event(message: Option<String>) -> String {
    let event = Event {
        message: Some(message.unwrap_or_else(|| "This is a test".into())),
        level: Level::Info,
        ..Default::default()
    };

    Hub::with_active(|hub| hub.capture_event(event)).to_string()
}
