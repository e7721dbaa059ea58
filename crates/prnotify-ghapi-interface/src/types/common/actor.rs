use serde::{Deserialize, Serialize};

/// GitHub actor, as returned by the GraphQL API.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhActor {
    /// Login.
    pub login: String,
    /// Profile URL.
    pub url: String,
}

impl GhActor {
    /// Build an actor from a login, deriving its profile URL.
    pub fn from_login(login: &str) -> Self {
        Self {
            login: login.into(),
            url: format!("https://github.com/{login}"),
        }
    }
}
