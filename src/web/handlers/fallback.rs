//! Responses for requests the admin page does not serve.

use crate::error::AppError;

/// Any path other than `/`.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("not found")
}

/// Any method on `/` other than GET or POST.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed("bad method")
}
