//! Request/response records and the pure evaluation step

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use super::operator::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("unsupported operation, use +|-|*|/")]
    UnsupportedOperation,
    #[error("division by zero not allowed")]
    DivisionByZero,
}

impl CalcError {
    pub fn kind(self) -> &'static str {
        match self {
            Self::UnsupportedOperation => "unsupported_operation",
            Self::DivisionByZero => "division_by_zero",
        }
    }
}

/// Body of `POST /api/Calculadora`.
///
/// Property names match case-insensitively (`operacion`, `a`, `b`). Missing fields fall back
/// to their defaults, so an absent operator is reported as unsupported instead of failing
/// deserialization. Unknown properties are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationRequest {
    pub operation: String,
    pub a: f64,
    pub b: f64,
}

impl<'de> Deserialize<'de> for OperationRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        let mut request = Self::default();

        for (key, value) in fields {
            match key.to_lowercase().as_str() {
                "operacion" => {
                    request.operation = String::deserialize(value).map_err(D::Error::custom)?
                }
                "a" => request.a = f64::deserialize(value).map_err(D::Error::custom)?,
                "b" => request.b = f64::deserialize(value).map_err(D::Error::custom)?,
                _ => {}
            }
        }

        Ok(request)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationResult {
    pub operation: String,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

pub fn evaluate(operation: &str, a: f64, b: f64) -> Result<f64, CalcError> {
    let operator: Operator = operation.parse()?;
    debug!(operator = %operator, a, b, "evaluating operation");
    operator.apply(a, b)
}

impl OperationRequest {
    pub fn evaluate(&self) -> Result<OperationResult, CalcError> {
        let result = evaluate(&self.operation, self.a, self.b)?;
        Ok(OperationResult {
            operation: self.operation.clone(),
            a: self.a,
            b: self.b,
            result,
        })
    }
}
