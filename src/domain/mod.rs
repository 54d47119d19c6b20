//! Arithmetic domain: operator parsing and evaluation
//!
//! Provides the pure computation behind the calculator endpoint, independent of HTTP.

pub mod evaluator;
pub mod operator;

pub use evaluator::{evaluate, CalcError, OperationRequest, OperationResult};
pub use operator::Operator;
