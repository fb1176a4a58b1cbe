use axum::{extract::State, response::Json, http::StatusCode};
use serde::Serialize;

use super::AppState;
use crate::error::ApiError;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: i64,
    athletes: usize,
}

pub async fn health_check(
    State(registry): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), ApiError> {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        athletes: registry.count().await?,
    };

    Ok((StatusCode::OK, Json(response)))
}
