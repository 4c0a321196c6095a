//! Handler for short URL redirect.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::error::{AppError, StoreError};
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `ANY /{code}` - every method is handled the same way.
///
/// # Request Flow
///
/// 1. Percent-decode the path and trim leading/trailing `/`
/// 2. Empty code (`/`) redirects to the configured root URL
/// 3. Otherwise look the code up in the store
/// 4. Return 302 Found with the stored URL as `Location`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
/// Returns 500 Internal Server Error if the store fails; the cause is logged.
pub async fn redirect_handler(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    let path = urlencoding::decode(uri.path()).map_err(|_| AppError::not_found("not found"))?;
    let code = path.trim_matches('/');

    if code.is_empty() {
        return found(&state.root_url);
    }

    match state.store.get(code).await {
        Ok(url) => found(&url),
        Err(StoreError::NotFound) => Err(AppError::not_found("not found")),
        Err(e) => {
            error!(error = %e, code, "lookup failed");
            Err(AppError::internal("oops"))
        }
    }
}

fn found(location: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(location).map_err(|e| {
        error!(error = %e, location, "stored URL is not a valid Location header");
        AppError::internal("oops")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
