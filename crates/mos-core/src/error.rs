//! Input validation errors.
//!
//! The `Display` text of each variant is the message shown to the user.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Kn and Kp must be positive values")]
    InvalidCoefficient,

    #[error("Vth must be a positive value")]
    InvalidThreshold,

    #[error("Vgs max must be greater than Vgs min")]
    InvalidVgsRange,

    #[error("Vds max must be greater than Vds min")]
    InvalidVdsRange,
}

impl ValidationError {
    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidCoefficient => "INVALID_COEFFICIENT",
            ValidationError::InvalidThreshold => "INVALID_THRESHOLD",
            ValidationError::InvalidVgsRange => "INVALID_VGS_RANGE",
            ValidationError::InvalidVdsRange => "INVALID_VDS_RANGE",
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
