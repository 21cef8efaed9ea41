//! Structural errors raised to the caller.
//!
//! Per-sample numeric faults are not errors: they are reported as
//! [`crate::domain::SampleFault`] values alongside the coefficients.

use thiserror::Error;

use crate::domain::{BecModel, IndenterShape};

/// Caller-fixable configuration mistakes. A call that returns one of these
/// produced no coefficients.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BecError {
    /// The model does not define a correction for this indenter geometry.
    #[error("The {} BEC model is not suitable for the {shape} geometry.", .model.display_name())]
    GeometryMismatch { model: BecModel, shape: IndenterShape },

    /// Geometry tag that is not part of the known enumeration.
    #[error("Unknown indenter geometry: {0:?}")]
    UnknownShape(String),

    /// Model tag that is not part of the known enumeration.
    #[error("Unknown BEC model: {0:?}")]
    UnknownModel(String),

    /// Truncation order the model cannot honour.
    #[error("Invalid order {order} for the {} BEC model: {reason}", .model.display_name())]
    InvalidOrder {
        model: BecModel,
        order: usize,
        reason: String,
    },

    /// Two sequences that must be multiplied element-wise differ in length.
    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BecError {
    pub fn geometry_mismatch(model: BecModel, shape: IndenterShape) -> Self {
        Self::GeometryMismatch { model, shape }
    }

    pub fn invalid_order(model: BecModel, order: usize, reason: impl Into<String>) -> Self {
        Self::InvalidOrder {
            model,
            order,
            reason: reason.into(),
        }
    }
}
