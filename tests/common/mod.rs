//! Common test utilities for Dockpin integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Lock file with a header and no records
#[allow(dead_code)]
pub const EMPTY_LOCK: &str = "# dockpin apt lock file v1\nbase-image=debian:bookworm\n\n";

/// A scratch directory the binary runs in
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// `dockpin` running inside this workspace, isolated from the caller's env
    #[allow(deprecated)]
    pub fn dockpin(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("dockpin").expect("dockpin binary");
        cmd.current_dir(&self.path)
            .env_remove("DOCKPIN_DOCKERFILE")
            .env_remove("DOCKPIN_DOCKER")
            .env_remove("RUST_LOG");
        cmd
    }
}
