//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL, counting the visit.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// # Behavior
///
/// - Known code: visit counter incremented atomically, **302 Found** to the
///   original URL.
/// - Unknown or deleted code: **302 Found** to `/`. Not an error for this
///   endpoint, logged at debug level.
/// - Store failure: also degrades to **302 Found** to `/`, but logged at
///   error level so the two fallbacks stay distinguishable.
///
/// The end user never sees a raw error on this path.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.link_service.resolve_and_count(&short_code).await {
        Ok(link) => {
            debug!(%short_code, visits = link.visits, "Redirecting");
            found(link.original_url)
        }
        Err(AppError::NotFound(_)) => {
            debug!(%short_code, "Unknown short code, redirecting to home");
            found("/".to_string())
        }
        Err(err) => {
            error!(%short_code, error = %err, "Resolution failed, redirecting to home");
            found("/".to_string())
        }
    }
}

/// 302 Found to the given location.
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
