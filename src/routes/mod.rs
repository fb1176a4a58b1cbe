use std::sync::Arc;

use axum::{routing::get, Router};

use crate::db::Registry;

pub mod athletes;
pub mod health;

pub type AppState = Arc<Registry>;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Root and health
        .route("/", get(|| async { "Athlete Registry API - v1.0" }))
        .route("/health", get(health::health_check))

        // Athlete endpoints
        .route(
            "/athlete",
            get(athletes::get_athletes).post(athletes::create_athlete),
        )

        .with_state(state)
}
