use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use super::GhReviewState;
use crate::types::common::GhActor;

/// GitHub Review.
#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, PartialEq, Eq)]
pub struct GhReview {
    /// Author.
    pub author: GhActor,
    /// Body.
    pub body: Option<String>,
    /// State.
    pub state: GhReviewState,
    /// Last update.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
