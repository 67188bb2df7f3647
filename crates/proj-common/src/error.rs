//! Error types for projection setup and coordinate transformation.

use thiserror::Error;

/// Result type alias using ProjError.
pub type ProjResult<T> = Result<T, ProjError>;

/// Primary error type for projection operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjError {
    // === Setup Errors ===
    #[error("No projection to rotate set (o_proj is missing)")]
    MissingInnerProjection,

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Unknown projection: {0}")]
    UnknownProjection(String),

    // === Per-point Errors ===
    #[error("Coordinate outside projection domain: {0}")]
    ToleranceCondition(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

impl ProjError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create a ToleranceCondition error.
    pub fn tolerance(msg: impl Into<String>) -> Self {
        Self::ToleranceCondition(msg.into())
    }
}
