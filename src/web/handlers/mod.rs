//! Handlers for the admin page.

mod create;
mod fallback;
mod listing;

pub use create::{CreateMappingForm, create_handler};
pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use listing::{AdminTemplate, ListingRow, listing_handler};
