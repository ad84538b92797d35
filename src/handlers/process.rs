use axum::http::StatusCode;

use crate::protocol::CONFIRMATION_BODY;

/// Placeholder business handler for accepted posts.
///
/// Only ever reached through the validation middleware, so it does not inspect
/// the body.
pub async fn handle() -> (StatusCode, &'static str) {
    (StatusCode::OK, CONFIRMATION_BODY)
}
