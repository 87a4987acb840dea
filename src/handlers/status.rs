use axum::response::Json;
use tracing::{debug, instrument};

use crate::schemas::MessageResponse;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/test",
    tag = "status",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    )
)]
#[instrument]
pub async fn status() -> Json<MessageResponse> {
    debug!("Test endpoint called");

    Json(MessageResponse {
        message: "ok".to_string(),
    })
}
