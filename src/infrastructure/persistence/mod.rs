//! SQLite repository implementations.
//!
//! - [`SqliteMappingRepository`] - Shortcode mapping storage and retrieval

pub mod sqlite_mapping_repository;

pub use sqlite_mapping_repository::SqliteMappingRepository;
