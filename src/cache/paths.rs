//! Archive directory layout

use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// apt's archive directory
pub const DEFAULT_ARCHIVE_DIR: &str = "/var/cache/apt/archives";

/// Staging subdirectory for in-flight downloads
pub const PARTIAL_DIR: &str = "partial";

/// Root of the package cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveDir {
    root: PathBuf,
}

impl ArchiveDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn partial_dir(&self) -> PathBuf {
        self.root.join(PARTIAL_DIR)
    }

    /// Canonical location of a verified package
    pub fn final_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Staging location of a package while it downloads
    pub fn partial_path(&self, file_name: &str) -> PathBuf {
        self.partial_dir().join(file_name)
    }

    /// Create the root and staging directories if missing
    pub fn ensure_dirs(&self) -> Result<()> {
        let partial = self.partial_dir();
        std::fs::create_dir_all(&partial)
            .map_err(|e| error::fs::write_failed(partial.display().to_string(), e))
    }
}

impl Default for ArchiveDir {
    fn default() -> Self {
        Self::new(DEFAULT_ARCHIVE_DIR)
    }
}
