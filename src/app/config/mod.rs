mod load_config;

pub use load_config::{load_config, load_details_file};
