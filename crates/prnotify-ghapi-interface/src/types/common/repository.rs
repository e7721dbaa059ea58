use serde::{Deserialize, Serialize};

use super::{GhActor, GhUser};

/// GitHub Repository, as sent in webhook payloads.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepository {
    /// Name.
    pub name: String,
    /// Full name.
    pub full_name: String,
    /// Owner.
    pub owner: GhUser,
}

/// Repository context attached to a pull request snapshot.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepositoryInfo {
    /// Name.
    pub name: String,
    /// Repository URL.
    pub url: String,
    /// Owner.
    pub owner: GhActor,
}
