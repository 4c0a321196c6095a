#![allow(dead_code)]

use std::sync::Arc;
use tendsto::domain::repositories::MappingRepository;
use tendsto::infrastructure::persistence::SqliteMappingRepository;
use tendsto::state::AppState;

pub const TEST_ROOT_URL: &str = "https://root.example/project";

pub async fn create_test_store() -> Arc<SqliteMappingRepository> {
    Arc::new(SqliteMappingRepository::in_memory().await.unwrap())
}

pub async fn create_test_mapping(store: &SqliteMappingRepository, shortcode: &str, url: &str) {
    store.set(shortcode, url).await.unwrap();
}

/// Stores a row whose `url` is a BLOB, which cannot be decoded as text.
pub async fn create_unreadable_mapping(store: &SqliteMappingRepository, shortcode: &str) {
    sqlx::query("INSERT INTO urls (shortcode, url) VALUES (?, X'C0FFEE')")
        .bind(shortcode)
        .execute(store.pool())
        .await
        .unwrap();
}

pub fn create_test_state(store: Arc<SqliteMappingRepository>) -> AppState {
    AppState::new(store, TEST_ROOT_URL)
}
