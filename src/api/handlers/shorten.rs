//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::link::LinkResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::domain::entities::CodeMode;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com/some/long/path",
///   "customName": "my-link"   // optional
/// }
/// ```
///
/// With `customName`, the name is used verbatim or the request fails; without
/// it a random code is allocated with bounded collision retries.
///
/// # Responses
///
/// - **201 Created** with the link as JSON
/// - **400 Bad Request** for an invalid URL or custom name
/// - **409 Conflict** when the custom name is already taken
/// - **500 Internal Server Error** when allocation retries are exhausted or
///   the store is unavailable
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let mode = match payload.custom_name {
        Some(name) => CodeMode::Custom(name),
        None => CodeMode::Random(state.random_code_length),
    };

    let link = state.link_service.allocate(&payload.original_url, mode).await?;

    tracing::info!(short_code = %link.short_code, "Link created");

    Ok((StatusCode::CREATED, Json(LinkResponse::from(link))))
}
