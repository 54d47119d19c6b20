//! HTTP layer for the calculator
//!
//! Provides the calculation endpoint together with health and discovery metadata.

pub mod handlers;

pub const CALCULATE_PATH: &str = "/api/Calculadora";
