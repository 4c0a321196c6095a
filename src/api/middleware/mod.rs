//! Middleware shared by both listeners.

pub mod tracing;
