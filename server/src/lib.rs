//! BMI suggestion service.
//!
//! Receives a BMI record from the mobile app and returns a fixed set of
//! health suggestions for its classification label.

pub mod config;
pub mod routes;
pub mod suggestions;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// Builds the application router with all routes and the CORS layer.
pub fn app() -> Router {
    // CORS layer: allow requests from any origin (the Expo app in development)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::health::health))
        .route("/api/sugerencias", post(routes::sugerencias::get_suggestions))
        .layer(cors)
}
