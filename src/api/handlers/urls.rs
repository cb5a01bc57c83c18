//! Handlers for the dashboard endpoints: list recent links, delete a link.

use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::{error, info};

use crate::api::dto::link::LinkResponse;
use crate::api::dto::urls::DeleteLinkRequest;
use crate::error::AppError;
use crate::state::AppState;

/// How many links the dashboard list returns.
const RECENT_LINKS_LIMIT: i64 = 10;

/// Lists the most recently created links, newest first.
///
/// # Endpoint
///
/// `GET /urls`
///
/// Always answers with a JSON array: store failures degrade to an empty list
/// (logged at error level) so the dashboard never renders a broken page.
pub async fn list_urls_handler(State(state): State<AppState>) -> Json<Vec<LinkResponse>> {
    match state.link_service.list_recent(RECENT_LINKS_LIMIT).await {
        Ok(links) => Json(links.into_iter().map(LinkResponse::from).collect()),
        Err(err) => {
            error!(error = %err, "Listing links failed, returning empty list");
            Json(Vec::new())
        }
    }
}

/// Deletes a link by id, freeing its short code for reuse.
///
/// # Endpoint
///
/// `DELETE /urls` with body `{"id": 42}`
///
/// # Responses
///
/// - **200 OK** with a confirmation message
/// - **404 Not Found** if the id no longer exists
/// - **500 Internal Server Error** on store failure
pub async fn delete_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<DeleteLinkRequest>,
) -> Result<Json<Value>, AppError> {
    state.link_service.remove(payload.id).await?;

    info!(id = payload.id, "Link deleted");

    Ok(Json(json!({ "message": "Link deleted" })))
}
