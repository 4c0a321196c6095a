//! Admin page route configuration.

use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::{
    create_handler, listing_handler, method_not_allowed_handler, not_found_handler,
};
use axum::{Router, routing::get};

/// Builds the admin router.
///
/// # Endpoints
///
/// - `GET /` - Listing of every mapping plus the creation form
/// - `POST /` - Create a mapping, then redirect back to `/`
///
/// Other methods on `/` get 405; every other path gets 404.
pub fn admin_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(listing_handler)
                .post(create_handler)
                .fallback(method_not_allowed_handler),
        )
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer("ts-srv"))
}
