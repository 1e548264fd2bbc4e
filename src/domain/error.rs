use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for llmprompts operations.
///
/// Building a prompt never fails; these errors come from the surfaces around
/// it (configuration, input files, output encoding).
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// An explicitly requested configuration file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Malformed `llmprompts.toml`.
    #[error("Malformed config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Malformed details file.
    #[error("Malformed details file: {0}")]
    DetailsParse(#[from] serde_yaml::Error),

    /// JSON output could not be produced.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required prompt input was given neither on the command line nor in config.
    #[error("Missing {0}: pass it as a flag or set it in llmprompts.toml")]
    MissingInput(&'static str),

    /// The fragment-joining template could not be prepared.
    #[error("Template error: {0}")]
    Template(String),
}
