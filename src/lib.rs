use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;

pub fn build_app() -> Router {
    Router::new()
        .route("/", get(http::handlers::discovery))
        .route("/health", get(http::handlers::health))
        .route(http::CALCULATE_PATH, post(http::handlers::calculate))
        .layer(middleware::from_fn(logging::request_logging_middleware))
}
