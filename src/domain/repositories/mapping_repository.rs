//! Repository trait for shortcode mapping data access.

use crate::domain::entities::ShortcodeMapping;
use crate::error::StoreError;
use async_trait::async_trait;

/// Durable shortcode → URL store shared by both listeners.
///
/// Implementations must be safe to call concurrently from many tasks; callers
/// add no locking of their own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Looks up the destination URL for a shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no mapping exists and
    /// [`StoreError::Io`] on database errors.
    async fn get(&self, shortcode: &str) -> Result<String, StoreError>;

    /// Inserts a new mapping.
    ///
    /// Uniqueness is left to the database constraint; there is no pre-check.
    /// A successful insert is visible to subsequent `get` and `list` calls.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if the shortcode is already mapped,
    /// leaving the existing mapping untouched, and [`StoreError::Io`] on
    /// other database errors.
    async fn set(&self, shortcode: &str, url: &str) -> Result<(), StoreError>;

    /// Enumerates every stored mapping.
    ///
    /// The outer result fails when the query itself fails. Each inner result
    /// carries the decode outcome of one row, so a single malformed row does
    /// not hide the others.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] on database errors.
    async fn list(&self) -> Result<Vec<Result<ShortcodeMapping, StoreError>>, StoreError>;
}
