use serde::{Deserialize, Serialize};

/// GitHub Team, as sent in webhook payloads.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhTeam {
    /// Team name.
    pub name: String,
    /// Team URL.
    #[serde(default)]
    pub html_url: String,
}
