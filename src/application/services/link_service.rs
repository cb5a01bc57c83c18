//! The link registry: allocation, resolution, deletion, and listing.

use std::sync::Arc;

use crate::domain::entities::{CodeMode, Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate, random_code};
use crate::utils::retry::with_retry;
use crate::utils::url_validator::validate_url;

/// Total insert attempts for a randomly generated code before giving up.
const RANDOM_RETRY_ATTEMPTS: u32 = 3;

/// Service upholding the two registry invariants: short-code uniqueness and
/// a monotonic, lossless visit counter.
///
/// Holds no link state in memory; both invariants are delegated to the store
/// (uniqueness constraint, atomic increment) so concurrent requests need no
/// in-process coordination.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new link, choosing the short code according to `mode`.
    ///
    /// The URL is stored exactly as submitted once it validates. Uniqueness
    /// is enforced by inserting directly and treating the store's constraint
    /// violation as the collision signal, so check-then-insert races cannot
    /// occur.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if `original_url` is not absolute http/https
    /// - [`AppError::InvalidFormat`] if a custom name fails validation
    /// - [`AppError::CodeTaken`] if a custom name is already in use (custom
    ///   names are a deliberate choice, never silently retried)
    /// - [`AppError::AllocationExhausted`] if random codes kept colliding for
    ///   all [`RANDOM_RETRY_ATTEMPTS`] attempts
    /// - [`AppError::StoreUnavailable`] on store errors
    pub async fn allocate(&self, original_url: &str, mode: CodeMode) -> Result<Link, AppError> {
        validate_url(original_url)?;

        match mode {
            CodeMode::Custom(name) => {
                let short_code = generate(CodeMode::Custom(name))?;

                self.repository
                    .insert(NewLink {
                        short_code,
                        original_url: original_url.to_string(),
                    })
                    .await
            }
            CodeMode::Random(length) => {
                with_retry(RANDOM_RETRY_ATTEMPTS, || {
                    self.repository.insert(NewLink {
                        short_code: random_code(length),
                        original_url: original_url.to_string(),
                    })
                })
                .await
                .map_err(|err| match err {
                    AppError::CodeTaken(_) => AppError::AllocationExhausted,
                    other => other,
                })
            }
        }
    }

    /// Resolves a short code and counts the visit in one atomic step.
    ///
    /// Returns the link with its post-increment counter. Concurrent
    /// resolutions of the same code are all reflected; no increment is lost.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never allocated or was
    /// deleted, [`AppError::StoreUnavailable`] on store errors.
    pub async fn resolve_and_count(&self, short_code: &str) -> Result<Link, AppError> {
        self.repository
            .increment_visits(short_code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No link for short code '{short_code}'")))
    }

    /// Removes the link with the given id, freeing its code for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id no longer exists (callers may
    /// treat that as success), [`AppError::StoreUnavailable`] on store errors.
    pub async fn remove(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("No link with id {id}")))
        }
    }

    /// Returns up to `limit` links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        self.repository.list_recent(limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn make_link(id: i64, code: &str, url: &str) -> Link {
        Link::new(id, code.to_string(), url.to_string(), 0, Utc::now())
    }

    #[tokio::test]
    async fn test_allocate_custom_success() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_insert()
            .withf(|new_link| {
                new_link.short_code == "my-link" && new_link.original_url == "https://example.com/a"
            })
            .times(1)
            .returning(|new_link| {
                Ok(make_link(10, &new_link.short_code, &new_link.original_url))
            });

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .allocate(
                "https://example.com/a",
                CodeMode::Custom("my-link".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(link.short_code, "my-link");
        assert_eq!(link.visits, 0);
    }

    #[tokio::test]
    async fn test_allocate_custom_taken_is_not_retried() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::CodeTaken("Short code already taken".to_string())));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .allocate(
                "https://example.com",
                CodeMode::Custom("taken-name".to_string()),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::CodeTaken(_)));
    }

    #[tokio::test]
    async fn test_allocate_invalid_url_hits_no_repository() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .allocate("not-a-url", CodeMode::Custom("x-y-z".to_string()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_allocate_invalid_custom_format() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .allocate("https://x.com", CodeMode::Custom("ab".to_string()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidFormat(_)));
    }

    #[tokio::test]
    async fn test_allocate_random_generates_requested_length() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_insert()
            .withf(|new_link| {
                new_link.short_code.len() == 8
                    && new_link.short_code.chars().all(|c| c.is_ascii_alphanumeric())
            })
            .times(1)
            .returning(|new_link| {
                Ok(make_link(1, &new_link.short_code, &new_link.original_url))
            });

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .allocate("https://example.com", CodeMode::Random(8))
            .await
            .unwrap();

        assert_eq!(link.short_code.len(), 8);
    }

    #[tokio::test]
    async fn test_allocate_random_retries_on_collision() {
        let mut mock_repo = MockLinkRepository::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_mock = calls.clone();

        mock_repo.expect_insert().times(3).returning(move |new_link| {
            let n = calls_in_mock.fetch_add(1, Ordering::SeqCst);
            if n < 2 {
                Err(AppError::CodeTaken("Short code already taken".to_string()))
            } else {
                Ok(make_link(7, &new_link.short_code, &new_link.original_url))
            }
        });

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .allocate("https://example.com", CodeMode::Random(8))
            .await
            .unwrap();

        assert_eq!(link.id, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_allocate_random_exhausts_retry_budget() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_insert()
            .times(3)
            .returning(|_| Err(AppError::CodeTaken("Short code already taken".to_string())));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .allocate("https://example.com", CodeMode::Random(8))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::AllocationExhausted
        ));
    }

    #[tokio::test]
    async fn test_allocate_random_store_error_is_not_retried() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::StoreUnavailable(sqlx::Error::PoolClosed)));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .allocate("https://example.com", CodeMode::Random(8))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::StoreUnavailable(_)
        ));
    }

    #[tokio::test]
    async fn test_resolve_and_count_returns_updated_link() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_increment_visits()
            .withf(|code| code == "my-link")
            .times(1)
            .returning(|code| {
                let mut link = make_link(1, code, "https://example.com/a");
                link.visits = 1;
                Ok(Some(link))
            });

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service.resolve_and_count("my-link").await.unwrap();

        assert_eq!(link.original_url, "https://example.com/a");
        assert_eq!(link.visits, 1);
    }

    #[tokio::test]
    async fn test_resolve_and_count_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_increment_visits()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.resolve_and_count("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_success() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_delete()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(true));

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(service.remove(42).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_missing_id() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.remove(999).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_recent_passes_limit_through() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_list_recent()
            .withf(|limit| *limit == 10)
            .times(1)
            .returning(|_| {
                Ok(vec![
                    make_link(2, "newer", "https://example.com/2"),
                    make_link(1, "older", "https://example.com/1"),
                ])
            });

        let service = LinkService::new(Arc::new(mock_repo));

        let links = service.list_recent(10).await.unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].short_code, "newer");
    }
}
