//! Admin page served on the tailnet only.
//!
//! Lists every mapping and creates new ones from a form. Uses Askama templates
//! for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and form handlers
//! - [`routes`] - Admin route configuration

pub mod handlers;
pub mod routes;
