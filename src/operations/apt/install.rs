//! `dockpin apt install` workflow
//!
//! Every locked package is fetched and verified before the installer runs;
//! a single failed download aborts the run without installing anything.

use std::path::PathBuf;

use tracing::debug;

use crate::cache::{ArchiveDir, Fetcher};
use crate::config::LockDocument;
use crate::error::{self, Result};
use crate::external::PackageInstaller;
use crate::transaction::FetchedFiles;

/// Options for installing
#[derive(Debug, Clone)]
pub struct AptInstallOptions {
    /// Lock file to install from
    pub lock_file: PathBuf,
    /// Where packages are downloaded to
    pub archive: ArchiveDir,
}

/// Orchestrator for `apt install`
pub struct AptInstallOperation<'a, I: PackageInstaller> {
    installer: &'a I,
    options: AptInstallOptions,
}

impl<'a, I: PackageInstaller> AptInstallOperation<'a, I> {
    pub fn new(installer: &'a I, options: AptInstallOptions) -> Self {
        Self { installer, options }
    }

    /// Install all locked packages, returning how many were installed
    pub fn execute(&self) -> Result<usize> {
        let lock_path = &self.options.lock_file;
        let text = std::fs::read_to_string(lock_path).map_err(|e| {
            error::fs::read_failed(format!("pin file {}", lock_path.display()), e)
        })?;
        let document = LockDocument::parse(&text)?;

        if document.is_empty() {
            eprintln!("No packages in the lock file, nothing to be done");
            return Ok(0);
        }

        let fetcher = Fetcher::new(self.options.archive.clone())?;
        let mut fetched = FetchedFiles::new();
        for record in &document.records {
            fetched.track(fetcher.fetch(record)?);
        }

        debug!(
            count = fetched.paths().len(),
            archive = %fetcher.archive().root().display(),
            "all packages verified"
        );
        self.installer.install(fetched.paths())?;
        Ok(document.records.len())
    }
}
