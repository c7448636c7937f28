use std::fmt;
use validator::ValidationError;

use crate::constants::{
    DUPLICATE_NAME_ERROR, EMPTY_NAME_ERROR, NAME_TOO_LONG_ERROR, SPIN_IN_PROGRESS_ERROR,
};

#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    /// Selection was asked to draw from an empty wheel.
    InvalidSelection,
    EmptyPalette,
    InvalidName(ValidationError),
    DuplicateName(String),
    /// The name list cannot change while a spin is in flight.
    SpinInProgress,
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelection => write!(f, "Cannot pick a winner from an empty wheel"),
            Self::EmptyPalette => write!(f, "Wheel palette must contain at least one color"),
            Self::InvalidName(e) => match &*e.code {
                "name_too_long" => write!(f, "{}", NAME_TOO_LONG_ERROR),
                _ => write!(f, "{}", EMPTY_NAME_ERROR),
            },
            Self::DuplicateName(name) => write!(f, "{}: {}", DUPLICATE_NAME_ERROR, name),
            Self::SpinInProgress => write!(f, "{}", SPIN_IN_PROGRESS_ERROR),
        }
    }
}

impl std::error::Error for WheelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidName(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for WheelError {
    fn from(err: ValidationError) -> Self {
        WheelError::InvalidName(err)
    }
}
