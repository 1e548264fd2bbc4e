//! Shared testing utilities for llmprompts CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory used as the CLI working directory.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `llmprompts` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("llmprompts").expect("Failed to locate llmprompts binary");
        cmd.current_dir(self.work_dir()).env_remove("LLMPROMPTS_LOG");
        cmd
    }

    /// Write `llmprompts.toml` into the working directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("llmprompts.toml", content)
    }

    /// Write an arbitrary file relative to the working directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}
