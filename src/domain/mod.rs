pub mod config;
pub mod error;
pub mod prompt;

pub use config::{IsRelevantConfig, PromptConfig};
pub use error::AppError;
pub use prompt::{IsRelevantRequest, PromptFragments};
