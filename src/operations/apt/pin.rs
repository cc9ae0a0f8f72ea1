//! `dockpin apt pin` workflow
//!
//! Reads the package selection, determines the image apt should run in,
//! asks apt for the exact downloads and stores its answer as the lock file.

use std::path::PathBuf;

use console::Style;
use tracing::debug;

use crate::config::{FilePath, LockDocument, write_atomic};
use crate::dockerfile;
use crate::error::{self, DockpinError, Result};
use crate::external::PackageResolver;

/// Options for pinning
#[derive(Debug, Clone)]
pub struct AptPinOptions {
    /// Newline separated package names
    pub selection_file: PathBuf,
    /// Lock file to write
    pub lock_file: PathBuf,
    /// Image to resolve in; inferred from the Dockerfile when absent
    pub base_image: Option<String>,
    /// Dockerfile used to infer the base image
    pub dockerfile: FilePath,
}

/// Package names from a selection file, one per line
pub fn parse_selection(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Orchestrator for `apt pin`
pub struct AptPinOperation<'a, R: PackageResolver> {
    resolver: &'a R,
    options: AptPinOptions,
}

impl<'a, R: PackageResolver> AptPinOperation<'a, R> {
    pub fn new(resolver: &'a R, options: AptPinOptions) -> Self {
        Self { resolver, options }
    }

    /// Resolve and write the lock file, returning what was written
    pub fn execute(&self) -> Result<LockDocument> {
        let selection_path = &self.options.selection_file;
        let selection = std::fs::read_to_string(selection_path).map_err(|e| {
            error::fs::read_failed(format!("selection file {}", selection_path.display()), e)
        })?;
        let packages = parse_selection(&selection);
        debug!(count = packages.len(), "read package selection");

        let base_image = self.base_image()?;
        let output = self.resolver.print_uris(&base_image, &packages)?;

        let mut text = LockDocument::preamble(Some(&base_image));
        text.push_str(&output);

        // apt's output is stored verbatim; parsing it is a self-check only.
        let document = LockDocument::parse(&text).map_err(error::lockfile::inconsistent)?;
        check_round_trip(&document)?;

        write_atomic(&self.options.lock_file, text.as_bytes())?;
        eprintln!(
            "{} {} package file(s) in {}",
            Style::new().bold().green().apply_to("Pinned"),
            document.records.len(),
            self.options.lock_file.display()
        );

        Ok(document)
    }

    fn base_image(&self) -> Result<String> {
        if let Some(image) = &self.options.base_image {
            return Ok(image.clone());
        }

        let dockerfile = &self.options.dockerfile;
        let text = dockerfile.read().map_err(|e| match e {
            DockpinError::FileReadFailed { path, reason } => error::fs::read_failed(
                format!("{path} (needed to determine your base image)"),
                reason,
            ),
            other => other,
        })?;

        let image = dockerfile::find_last_reference(&text)
            .ok_or(DockpinError::NoBaseImage)?
            .reference();

        eprintln!(
            "Based on your Dockerfile, it looks like you'll use dockpin in an image based on {image}. \
             Pass --base-image if that's incorrect."
        );
        Ok(image)
    }
}

/// The parsed records must come back unchanged from their rendered form
fn check_round_trip(document: &LockDocument) -> Result<()> {
    let rendered = document.format();
    match LockDocument::parse(&rendered) {
        Ok(reparsed) if reparsed == *document => Ok(()),
        Ok(_) => Err(error::lockfile::inconsistent(
            "records change when the lock file is rendered again",
        )),
        Err(e) => Err(error::lockfile::inconsistent(e)),
    }
}
