//! Public listener route configuration.

use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Builds the public redirect router.
///
/// Every path and every method reaches [`redirect_handler`]; there is no
/// per-route matching, so `//code` and `/code/` resolve like `/code`.
pub fn public_router(state: AppState) -> Router {
    Router::new()
        .fallback(redirect_handler)
        .with_state(state)
        .layer(tracing::layer("pubsrv"))
}
