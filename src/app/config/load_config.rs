//! Prompt configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::domain::config::{self, paths};
use crate::domain::{AppError, PromptConfig};

/// Load `llmprompts.toml`.
///
/// An explicit `path` must exist. Without one, `<root>/llmprompts.toml` is
/// read when present and an empty config is returned otherwise.
pub fn load_config(root: &Path, path: Option<&Path>) -> Result<PromptConfig, AppError> {
    let config_path = match path {
        Some(explicit) => {
            if !explicit.is_file() {
                return Err(AppError::ConfigNotFound(explicit.to_path_buf()));
            }
            explicit.to_path_buf()
        }
        None => {
            let default = paths::config(root);
            if !default.is_file() {
                tracing::debug!(path = %default.display(), "no config file; using built-in defaults");
                return Ok(PromptConfig::default());
            }
            default
        }
    };

    tracing::debug!(path = %config_path.display(), "loading config");
    let content = fs::read_to_string(&config_path)?;
    config::parse_config_content(&content)
}

/// Load a YAML details file.
pub fn load_details_file(path: &Path) -> Result<Vec<String>, AppError> {
    let content = fs::read_to_string(path)?;
    config::parse_details_content(&content)
}
