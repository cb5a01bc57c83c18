//! DTOs for the dashboard list/delete endpoint.

use serde::Deserialize;

/// Request to delete a link by its id.
#[derive(Debug, Deserialize)]
pub struct DeleteLinkRequest {
    pub id: i64,
}
