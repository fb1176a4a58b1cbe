use std::sync::Arc;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod error;
mod models;
mod routes;

use config::Config;
use db::Registry;

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting athlete registry...");

    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    let registry = match &config.database_url {
        Some(url) => {
            let registry = Registry::connect_sqlite(url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection established.");
            registry
        }
        None => {
            tracing::info!("DATABASE_URL not set, keeping athletes in memory.");
            Registry::in_memory()
        }
    };

    if config.seed_sample_data {
        registry
            .seed_defaults()
            .await
            .expect("Failed to seed sample athletes");
    }

    let addr = config.addr();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::router(Arc::new(registry))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
