//! DTOs for the shorten endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten a single URL.
///
/// When `custom_name` is absent a random code is generated instead. Detailed
/// URL and custom-name validation happens in the registry; the DTO only
/// bounds the payload.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute HTTP/HTTPS).
    #[validate(length(min = 1, max = 2048, message = "originalUrl must be 1-2048 characters"))]
    pub original_url: String,

    /// Optional user-chosen short code.
    pub custom_name: Option<String>,
}
