//! Error types for the complaint dashboard

use thiserror::Error as ThisError;

/// Main error type for dashboard data loading and configuration
#[derive(Debug, ThisError)]
pub enum Error {
    /// The fixture could not be parsed as JSON
    #[error("Fixture error: {0}")]
    Fixture(#[from] serde_json::Error),

    /// A record failed validation
    #[error("Validation error: {field} - {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Two records share an identifier
    #[error("Duplicate complaint id: {id}")]
    DuplicateId {
        /// The repeated identifier
        id: u32,
    },

    /// A section identifier outside the sidebar set
    #[error("Unknown section: {value}")]
    UnknownSection {
        /// The identifier that failed to parse
        value: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::uninlined_format_args, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as StdError;

    #[test]
    fn test_fixture_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::from(json_error);

        assert!(matches!(error, Error::Fixture(_)));
        assert!(format!("{}", error).starts_with("Fixture error:"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_validation_error() {
        let error = Error::Validation {
            field: "lat".to_string(),
            message: "out of range".to_string(),
        };

        assert_eq!(format!("{}", error), "Validation error: lat - out of range");
    }

    #[test]
    fn test_duplicate_id_error() {
        let error = Error::DuplicateId { id: 7 };
        assert_eq!(format!("{}", error), "Duplicate complaint id: 7");
    }

    #[test]
    fn test_unknown_section_error() {
        let error = Error::UnknownSection {
            value: "billing".to_string(),
        };
        assert_eq!(format!("{}", error), "Unknown section: billing");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_config_error_conversion() {
        let error = Error::from(config::ConfigError::Message("bad key".to_string()));

        match error {
            Error::Configuration { message } => assert_eq!(message, "bad key"),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }
}
