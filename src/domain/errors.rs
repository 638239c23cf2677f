use thiserror::Error;

/// Errors raised while validating user-entered property attributes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a value for {field}")]
    MissingField { field: &'static str },

    #[error("Please enter a valid number for {field}")]
    NotANumber { field: &'static str },

    #[error("{field} cannot be negative")]
    NegativeValue { field: &'static str },
}

/// Errors surfaced by a full estimate request
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Prediction failed: {reason}")]
    Model { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_formatting() {
        let err = ValidationError::MissingField {
            field: "Square Footage",
        };
        assert_eq!(err.to_string(), "Please enter a value for Square Footage");

        let err = ValidationError::NotANumber { field: "Bedrooms" };
        assert_eq!(err.to_string(), "Please enter a valid number for Bedrooms");

        let err = ValidationError::NegativeValue {
            field: "Floor Number",
        };
        assert_eq!(err.to_string(), "Floor Number cannot be negative");
    }

    #[test]
    fn test_estimate_error_is_transparent_for_validation() {
        let err = EstimateError::from(ValidationError::NegativeValue {
            field: "Parking Spots",
        });
        assert_eq!(err.to_string(), "Parking Spots cannot be negative");
    }
}
