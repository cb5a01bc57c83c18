//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its visit counter.
///
/// `short_code` and `original_url` are immutable after creation; `visits` is
/// mutated only by resolution. Short codes are case-sensitive.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        visits: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            visits,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// `visits` and `created_at` are assigned by the store at insert time.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
}

/// How the short code for a new link is chosen.
#[derive(Debug, Clone)]
pub enum CodeMode {
    /// A user-supplied name, used verbatim after validation. Never retried on
    /// collision: the name is a deliberate choice.
    Custom(String),
    /// A random alphanumeric code of the given length, retried a bounded
    /// number of times on collision.
    Random(usize),
}
