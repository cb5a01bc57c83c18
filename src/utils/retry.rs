//! Bounded retry for short-code collisions.

use crate::error::AppError;
use std::future::Future;

/// Re-invokes `operation` while it fails with [`AppError::CodeTaken`], up to
/// `attempts` total invocations.
///
/// Any other error returns immediately, as does the `CodeTaken` of the final
/// attempt (the caller decides how to surface an exhausted budget). The bound
/// trades a small chance of user-visible failure under heavy collision load
/// for never looping unboundedly.
pub async fn with_retry<T, F, Fut>(attempts: u32, mut operation: F) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut remaining = attempts.max(1);

    loop {
        remaining -= 1;

        match operation().await {
            Err(AppError::CodeTaken(_)) if remaining > 0 => {
                tracing::debug!(remaining, "Short code collision, retrying");
            }
            other => return other,
        }
    }
}
