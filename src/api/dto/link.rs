//! JSON representation of a link.

use crate::domain::entities::Link;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A link as returned by the shorten and list endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            short_code: link.short_code,
            original_url: link.original_url,
            visits: link.visits,
            created_at: link.created_at,
        }
    }
}
