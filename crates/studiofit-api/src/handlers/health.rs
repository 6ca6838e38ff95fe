//! Health check and landing handlers.

use axum::Json;

use crate::dto::response::{ApiResponse, HealthResponse, MessageResponse};

/// GET /health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET / and GET /home
pub async fn landing() -> Json<ApiResponse<MessageResponse>> {
    Json(ApiResponse::ok(MessageResponse {
        message: "StudioFit API".to_string(),
    }))
}
