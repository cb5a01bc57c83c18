//! Shared application state injected into handlers.

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub db: Arc<PgPool>,
    /// Length of randomly generated short codes.
    pub random_code_length: usize,
}
