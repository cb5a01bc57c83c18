//! Validation of submitted long URLs.

use crate::error::AppError;
use url::Url;

/// Checks that `raw` parses as an absolute http/https URL with a host.
///
/// The URL is stored exactly as submitted: no normalization and no scheme
/// auto-prepending, so `example.com` without a scheme is rejected.
///
/// Control characters are rejected up front: the WHATWG parser strips ASCII
/// tab/CR/LF, so a string like `"https://a.com/x\ny"` would parse while the
/// stored raw value could never be emitted as a Location header.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] describing the first failed check.
pub fn validate_url(raw: &str) -> Result<(), AppError> {
    if raw.chars().any(|c| c.is_ascii_control()) {
        return Err(AppError::InvalidUrl(
            "URL must not contain control characters".to_string(),
        ));
    }

    let parsed =
        Url::parse(raw).map_err(|e| AppError::InvalidUrl(format!("Invalid URL: {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::InvalidUrl(
            "URL scheme must be http or https".to_string(),
        ));
    }

    if parsed.host_str().is_none() {
        return Err(AppError::InvalidUrl("URL must have a host".to_string()));
    }

    Ok(())
}
