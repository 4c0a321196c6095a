//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use std::path::Path;
use std::str::FromStr;

use crate::domain::entities::ShortcodeMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::StoreError;
use crate::utils::db_error::is_unique_violation;

const CREATE_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS urls (
        shortcode TEXT PRIMARY KEY,
        url       TEXT NOT NULL
    )
"#;

/// File-backed mapping store.
///
/// Wraps a [`SqlitePool`], which is safe to share between tasks; clones of the
/// repository are not needed, wrap it in an `Arc` instead.
pub struct SqliteMappingRepository {
    pool: SqlitePool,
}

impl SqliteMappingRepository {
    /// Opens (creating if absent) the database file at `path` and ensures the
    /// schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be opened or the schema
    /// cannot be created.
    pub async fn open(path: impl AsRef<Path>, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    /// Opens a private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the pool
    /// is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    /// Wraps an existing pool, creating the schema if it does not exist yet.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(CREATE_SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn decode_row(row: &SqliteRow) -> Result<ShortcodeMapping, StoreError> {
    Ok(ShortcodeMapping {
        shortcode: row.try_get("shortcode")?,
        url: row.try_get("url")?,
    })
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn get(&self, shortcode: &str) -> Result<String, StoreError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM urls WHERE shortcode = ?")
            .bind(shortcode)
            .fetch_optional(&self.pool)
            .await?;

        url.ok_or(StoreError::NotFound)
    }

    async fn set(&self, shortcode: &str, url: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO urls (shortcode, url) VALUES (?, ?)")
            .bind(shortcode)
            .bind(url)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::DuplicateKey {
                        shortcode: shortcode.to_string(),
                    }
                } else {
                    StoreError::Io(e)
                }
            })?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Result<ShortcodeMapping, StoreError>>, StoreError> {
        let rows = sqlx::query("SELECT shortcode, url FROM urls ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(decode_row).collect())
    }
}
