//! Input validation error types.

/// Errors raised when editing a platform setting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Numeric field received text that does not parse
    #[error("{field} expects a number, got '{input}'")]
    NotANumber { field: &'static str, input: String },

    /// Whole-number field received a fraction
    #[error("{field} expects a whole number, got '{input}'")]
    NotAWholeNumber { field: &'static str, input: String },

    /// Required text field left blank
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Malformed email address
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    /// Malformed host name
    #[error("'{0}' is not a valid host name")]
    InvalidHost(String),

    /// Toggles are flipped, not typed into
    #[error("{field} is a toggle and cannot take text input")]
    NotEditable { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::NotANumber {
            field: "Session Timeout (minutes)",
            input: "soon".to_string(),
        };
        assert!(error.to_string().contains("expects a number"));
        assert!(error.to_string().contains("soon"));

        let error = ValidationError::NotAWholeNumber {
            field: "SMTP Port",
            input: "25.5".to_string(),
        };
        assert_eq!(error.to_string(), "SMTP Port expects a whole number, got '25.5'");

        let error = ValidationError::Empty { field: "Site Name" };
        assert!(error.to_string().contains("cannot be empty"));

        let error = ValidationError::InvalidEmail("nobody".to_string());
        assert!(error.to_string().contains("nobody"));

        let error = ValidationError::InvalidHost("bad host".to_string());
        assert!(error.to_string().contains("host name"));
    }
}
