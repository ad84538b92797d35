//! Request-body validation middleware.
//!
//! [`validated`] wraps any downstream [`Router`] so that every request body is
//! checked against a [`CompiledSchema`] before the downstream handler runs.
//! Rejected requests are answered here and never reach the handler.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::middleware::{from_fn_with_state, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;

use crate::error::RequestError;
use crate::schema::CompiledSchema;

/// Shared, read-only state handed to [`validate_body`].
#[derive(Debug, Clone)]
pub struct ValidationState {
    pub schema: Arc<CompiledSchema>,
    pub body_limit: usize,
}

impl ValidationState {
    pub fn new(schema: Arc<CompiledSchema>, body_limit: usize) -> Self {
        Self { schema, body_limit }
    }
}

/// Wrap `downstream` with body validation.
///
/// Only matched routes are validated; unknown paths still fall through to 404.
pub fn validated(downstream: Router, state: ValidationState) -> Router {
    downstream.route_layer(from_fn_with_state(state, validate_body))
}

/// Buffer the body, validate it, then forward or reject.
///
/// On success the downstream handler receives the original request parts and
/// a body holding exactly the bytes that were validated.
pub async fn validate_body(
    State(state): State<ValidationState>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match axum::body::to_bytes(body, state.body_limit).await {
        Ok(b) => b,
        Err(e) => return RequestError::BodyUnreadable(e.to_string()).into_response(),
    };

    let report = match state.schema.validate_slice(&bytes) {
        Ok(r) => r,
        Err(e) => return RequestError::from(e).into_response(),
    };

    if !report.is_valid() {
        return RequestError::Invalid(report.into_violations()).into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
