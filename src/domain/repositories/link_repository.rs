//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link store.
///
/// The store is the single source of truth: it enforces short-code uniqueness
/// through a constraint and performs the visit increment as one atomic
/// read-modify-write. The registry holds no link state in memory.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `visits = 0` and a store-assigned timestamp.
    ///
    /// The insert is all-or-nothing: either the full row exists afterwards or
    /// nothing does.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeTaken`] if the short code is already stored
    /// (unique-constraint violation, the race-free collision signal).
    /// Returns [`AppError::StoreUnavailable`] on other store errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its exact short code, without counting a visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the visit counter and returns the updated link.
    ///
    /// The increment happens in a single store-level statement so concurrent
    /// resolutions of the same code never lose an update.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` with the post-increment counter if the code exists
    /// - `Ok(None)` if no link matches
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    async fn increment_visits(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Deletes a link by id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the id was
    /// already gone.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Lists up to `limit` links, newest first.
    ///
    /// Ordered by `created_at` descending with id as tie-break. Read-only,
    /// restartable snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError>;
}
