//! Scoped cleanup of downloaded packages
//!
//! Package files fetched for an install are only needed until `dpkg` has
//! consumed them. [`FetchedFiles`] tracks them and removes every tracked file
//! when dropped, whether the install succeeded, failed half-way through the
//! downloads, or the installer itself failed.
//!
//! ## Usage
//!
//! ```ignore
//! let mut fetched = FetchedFiles::new();
//! for record in &document.records {
//!     fetched.track(fetcher.fetch(record)?);
//! }
//! installer.install(fetched.paths())?;
//! // files removed here, on every exit path
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Package files to remove at the end of an install run
#[derive(Debug, Default)]
pub struct FetchedFiles {
    paths: Vec<PathBuf>,
}

impl FetchedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a file for removal
    pub fn track(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    /// Tracked files in fetch order
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    fn remove_all(&mut self) {
        for path in self.paths.drain(..) {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => eprintln!("Warning: Failed to remove {}: {}", path.display(), e),
            }
        }
    }
}

impl Drop for FetchedFiles {
    fn drop(&mut self) {
        self.remove_all();
    }
}
