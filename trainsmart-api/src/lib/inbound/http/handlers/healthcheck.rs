use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde_json::json;

/// Liveness probe. Unlike the API endpoints this body is not enveloped.
pub async fn healthcheck() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "up",
            "timestamp": Utc::now(),
        })),
    )
}
