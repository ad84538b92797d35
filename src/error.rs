//! Per-request failures and their HTTP mapping.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::protocol::ErrorResponse;
use crate::schema::SchemaError;

/// Failure while processing a single request.
///
/// Only `Invalid` carries detail to the client; every other variant is
/// logged and answered with an empty 500.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request body could not be read from the connection.
    #[error("request body could not be read: {0}")]
    BodyUnreadable(String),

    /// The body is JSON but violates the schema (400).
    #[error("request failed validation with {} violation(s)", .0.len())]
    Invalid(Vec<String>),

    /// The validator could not process the body at all (500).
    #[error("validator could not process request body: {0}")]
    Validator(#[from] SchemaError),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::BodyUnreadable(_) | Self::Validator(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        match self {
            Self::Invalid(errors) => {
                tracing::debug!(violations = errors.len(), "rejecting invalid request body");
                match ErrorResponse::new(errors).to_vec() {
                    Ok(body) => (
                        StatusCode::BAD_REQUEST,
                        [(header::CONTENT_TYPE, "application/json")],
                        body,
                    )
                        .into_response(),
                    Err(e) => {
                        tracing::error!(error = %e, "failed to serialize validation errors");
                        StatusCode::INTERNAL_SERVER_ERROR.into_response()
                    }
                }
            }
            Self::BodyUnreadable(_) => {
                tracing::warn!(error = %self, "request body unreadable");
                self.status().into_response()
            }
            Self::Validator(_) => {
                tracing::error!(error = %self, "validation machinery failed");
                self.status().into_response()
            }
        }
    }
}
