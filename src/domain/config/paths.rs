use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "llmprompts.toml";

/// `<root>/llmprompts.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
