pub mod model;
pub mod parse;
pub mod paths;

pub use model::{IsRelevantConfig, PromptConfig};
pub use parse::{parse_config_content, parse_details_content};
