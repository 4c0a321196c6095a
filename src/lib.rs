//! # tendsto
//!
//! A tiny URL shortener with two faces, built with Axum and SQLite.
//!
//! - **Public listener** ([`api`]) - unauthenticated HTTP on `:4242`. `/{code}`
//!   redirects to the stored URL, `/` redirects to the project page.
//! - **Admin listener** ([`web`]) - HTTPS bound only on the tailnet node
//!   `tendsto`. Lists every mapping and adds new ones from a form.
//!
//! Both share one [`domain::repositories::MappingRepository`] handle, created
//! at startup by [`server::run`]. Losing either listener ends the process.
//!
//! ## Layers
//!
//! - [`domain`] - Mapping entity and the store contract
//! - [`infrastructure`] - SQLite store and tailnet binding
//! - [`api`] / [`web`] - The two HTTP surfaces
//! - [`server`] - Startup and supervision
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]; every variable has
//! a default, see the [`config`] module.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod web;

pub use error::{AppError, StoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for integration tests.
pub mod prelude {
    pub use crate::domain::entities::ShortcodeMapping;
    pub use crate::domain::repositories::MappingRepository;
    pub use crate::error::{AppError, StoreError};
    pub use crate::infrastructure::persistence::SqliteMappingRepository;
    pub use crate::state::AppState;
}
