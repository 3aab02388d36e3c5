use axum::response::Json;

use crate::api::models::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Roulette server is running".to_string(),
    })
}
