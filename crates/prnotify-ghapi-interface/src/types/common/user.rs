use serde::{Deserialize, Serialize};

use super::GhActor;

/// GitHub User, as sent in webhook payloads.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhUser {
    /// Username.
    pub login: String,
    /// Profile URL.
    #[serde(default)]
    pub html_url: String,
}

impl From<GhUser> for GhActor {
    fn from(user: GhUser) -> Self {
        Self {
            login: user.login,
            url: user.html_url,
        }
    }
}
