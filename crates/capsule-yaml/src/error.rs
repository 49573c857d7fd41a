//! Error types for manifest parsing.

use capsule_core::ColorParseError;
use thiserror::Error;

/// Error type for manifest parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Malformed color string
    #[error("Invalid color for '{field}': {source}")]
    Color {
        /// Field name
        field: String,
        /// Underlying parse failure
        source: ColorParseError,
    },
    /// Two switches share an id
    #[error("Duplicate switch id: {0}")]
    DuplicateId(String),
    /// No switch with the requested id
    #[error("Unknown switch: {0}")]
    UnknownSwitch(String),
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
    /// Reading the manifest file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::DuplicateId("wifi".to_string());
        assert_eq!(err.to_string(), "Duplicate switch id: wifi");

        let err = ParseError::UnknownSwitch("bluetooth".to_string());
        assert_eq!(err.to_string(), "Unknown switch: bluetooth");

        let err = ParseError::invalid("density", "must be positive");
        assert_eq!(err.to_string(), "Invalid value for 'density': must be positive");
    }

    #[test]
    fn test_color_error_has_source() {
        let err = ParseError::Color {
            field: "wifi.track_on_color".to_string(),
            source: ColorParseError::InvalidLength,
        };
        assert!(err.to_string().starts_with("Invalid color for 'wifi.track_on_color'"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_yaml_error_converts() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("[").unwrap_err();
        let err: ParseError = yaml_err.into();
        assert!(matches!(err, ParseError::Yaml(_)));
        assert!(err.to_string().starts_with("YAML error:"));
    }
}
