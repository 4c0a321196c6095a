//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - SQLite repository implementations
//! - [`overlay`] - Admin listener binding on the tailnet overlay

pub mod overlay;
pub mod persistence;
