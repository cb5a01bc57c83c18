#![allow(dead_code)]

use snaplink::application::services::LinkService;
use snaplink::infrastructure::persistence::PgLinkRepository;
use snaplink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));

    AppState {
        link_service: Arc::new(LinkService::new(link_repository)),
        db: pool,
        random_code_length: 8,
    }
}

pub async fn insert_test_link(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO links (short_code, original_url) VALUES ($1, $2) RETURNING id",
    )
    .bind(code)
    .bind(url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn fetch_visits(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT visits FROM links WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn fetch_original_url(pool: &PgPool, code: &str) -> String {
    sqlx::query_scalar::<_, String>("SELECT original_url FROM links WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
