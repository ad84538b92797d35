use axum::Json;

use crate::protocol::HealthResponse;

/// Liveness probe. Mounted outside the validation middleware.
pub async fn handle() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
