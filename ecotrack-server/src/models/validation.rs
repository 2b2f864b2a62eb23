//! Validation error types

use std::fmt;

/// Validation error for domain values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Number must be finite and greater than zero
    NotPositive { field: &'static str },

    /// Value is not one of the known variants
    InvalidVariant { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::NotPositive { field } => write!(f, "{} must be greater than zero", field),
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidVariant {
            field: "role",
            value: "mayor".into(),
        };
        assert_eq!(err.to_string(), "invalid role value: 'mayor'");

        let err = ValidationError::Empty { field: "details" };
        assert_eq!(err.to_string(), "details cannot be empty");

        let err = ValidationError::NotPositive { field: "weight" };
        assert_eq!(err.to_string(), "weight must be greater than zero");
    }
}
