//! Axum HTTP handlers for the web server

use axum::Json;
use serde::Serialize;

use super::CALCULATE_PATH;
use crate::{
    domain::{operator::SUPPORTED_SYMBOLS, OperationRequest, OperationResult},
    errors::AppError,
    logging,
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DiscoveryResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub calculate_endpoint: &'static str,
    pub operations: [&'static str; 4],
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn discovery() -> Json<DiscoveryResponse> {
    Json(DiscoveryResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        calculate_endpoint: CALCULATE_PATH,
        operations: SUPPORTED_SYMBOLS,
    })
}

/// `POST /api/Calculadora`: evaluates one operation and echoes the inputs back.
pub async fn calculate(
    Json(request): Json<OperationRequest>,
) -> Result<Json<OperationResult>, AppError> {
    match request.evaluate() {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            logging::record_rejected_calculation(&request.operation, request.a, request.b, err);
            Err(err.into())
        }
    }
}
