//! Public redirect surface.
//!
//! Unauthenticated, plain HTTP. Resolves a path segment to a stored URL and
//! never mutates the store.
//!
//! # Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing shared with the admin surface
//! - [`routes`] - Router construction

pub mod handlers;
pub mod middleware;
pub mod routes;
