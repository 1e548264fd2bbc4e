//! Pure parse/validate for `llmprompts.toml`.

use crate::domain::{AppError, PromptConfig};

/// Parse and validate prompt configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<PromptConfig, AppError> {
    let config: PromptConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Parse a details file: a YAML sequence of phrases.
pub fn parse_details_content(content: &str) -> Result<Vec<String>, AppError> {
    Ok(serde_yaml::from_str(content)?)
}
