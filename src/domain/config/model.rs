use serde::Deserialize;

use crate::domain::AppError;

/// Contents of `llmprompts.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptConfig {
    #[serde(default)]
    pub is_relevant: IsRelevantConfig,
}

/// `[is_relevant]` defaults applied when the CLI omits a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IsRelevantConfig {
    pub data_origin: Option<String>,
    pub purpose: Option<String>,
    pub details: Option<Vec<String>>,
}

impl PromptConfig {
    /// Reject values that are present but blank.
    pub fn validate(&self) -> Result<(), AppError> {
        let section = &self.is_relevant;
        for (key, value) in [("data_origin", &section.data_origin), ("purpose", &section.purpose)] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(AppError::Configuration(format!(
                    "is_relevant.{} must not be empty",
                    key
                )));
            }
        }
        Ok(())
    }
}
