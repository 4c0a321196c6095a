//! Domain layer: the mapping entity and the store contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or persistence layers.

pub mod entities;
pub mod repositories;
