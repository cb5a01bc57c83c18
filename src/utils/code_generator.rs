//! Short code generation and validation.
//!
//! Produces candidate codes only; uniqueness is enforced by the store's
//! constraint when the registry inserts.

use crate::domain::entities::CodeMode;
use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

/// Allowed shape for user-supplied custom codes.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,30}$").unwrap());

/// Codes reserved for service endpoints, rejected to avoid routing conflicts.
const RESERVED_CODES: &[&str] = &["shorten", "urls", "health"];

/// Produces a candidate short code for the given mode.
///
/// - `Custom(name)` returns the name unchanged after validation.
/// - `Random(length)` returns a fresh random code; no uniqueness guarantee.
///
/// # Errors
///
/// Returns [`AppError::InvalidFormat`] if a custom name fails validation.
pub fn generate(mode: CodeMode) -> Result<String, AppError> {
    match mode {
        CodeMode::Custom(name) => {
            validate_custom_code(&name)?;
            Ok(name)
        }
        CodeMode::Random(length) => Ok(random_code(length)),
    }
}

/// Generates a random alphanumeric code of `length` characters.
///
/// Collision-resistant for practical lengths but not guaranteed unique; the
/// registry retries the insert on collision. Candidates matching a reserved
/// endpoint name are re-rolled, since such a code would be shadowed by the
/// static route and never resolvable.
pub fn random_code(length: usize) -> String {
    loop {
        let code: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(length)
            .map(char::from)
            .collect();

        if !is_reserved(&code) {
            return code;
        }
    }
}

/// Returns true if `code` names a service endpoint (exact, case-sensitive
/// match, like lookups).
fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - 3-30 characters from `[A-Za-z0-9_-]` (case-sensitive)
/// - Not a reserved service endpoint name
///
/// # Errors
///
/// Returns [`AppError::InvalidFormat`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::InvalidFormat(
            "Custom name must be 3-30 characters of letters, digits, hyphens, or underscores"
                .to_string(),
        ));
    }

    if is_reserved(code) {
        return Err(AppError::InvalidFormat(format!(
            "'{code}' is a reserved name"
        )));
    }

    Ok(())
}
