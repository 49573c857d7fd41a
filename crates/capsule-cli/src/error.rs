//! CLI error type.

use capsule_yaml::ParseError;
use thiserror::Error;

/// Anything that makes a command exit non-zero.
#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest could not be loaded or queried
    #[error(transparent)]
    Manifest(#[from] ParseError),
    /// Writing output failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
    /// Encoding a JSON record failed
    #[error("encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
