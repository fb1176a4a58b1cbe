use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::db::RegistryError;

#[derive(Debug)]
pub enum ApiError {
    DuplicateAthlete(String),
    DatabaseError(sqlx::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::DuplicateAthlete(national_id) => (
                StatusCode::CONFLICT,
                format!("An athlete with national id {} is already registered", national_id),
            ),
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::DuplicateKey { national_id } => ApiError::DuplicateAthlete(national_id),
            RegistryError::Database(err) => ApiError::DatabaseError(err),
        }
    }
}
