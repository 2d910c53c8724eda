//! Error types for the Axial engine.
//!
//! The layout solver itself never fails; these errors come from host-side
//! tree edits and from optional configuration checks.

use thiserror::Error;

use crate::types::NodeId;

/// Errors raised by scene hosts and configuration validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Unknown node {id}")]
    UnknownNode { id: NodeId },

    #[error("Invalid scale range: min scale {min} is greater than max scale {max}")]
    InvalidScaleRange { min: f32, max: f32 },

    #[error("Non-finite value for {field}: {value}")]
    NonFiniteValue { field: &'static str, value: f32 },
}
