//! Core business entities.

pub mod mapping;

pub use mapping::ShortcodeMapping;
