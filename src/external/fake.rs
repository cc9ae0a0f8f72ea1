//! Scripted stand-ins for the external tools

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use super::{ImageResolver, PackageInstaller, PackageResolver};
use crate::error::{self, Result};

/// Package resolver that returns canned `--print-uris` output
#[derive(Debug, Default)]
pub struct ScriptedPackageResolver {
    output: Option<String>,
    pub calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl ScriptedPackageResolver {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
            calls: RefCell::default(),
        }
    }

    /// A resolver whose every call fails
    pub fn failing() -> Self {
        Self::default()
    }
}

impl PackageResolver for ScriptedPackageResolver {
    fn print_uris(&self, base_image: &str, packages: &[String]) -> Result<String> {
        self.calls
            .borrow_mut()
            .push((base_image.to_string(), packages.to_vec()));
        self.output
            .clone()
            .ok_or_else(|| error::resolver::failed("fake-docker", "scripted failure"))
    }
}

/// Image resolver backed by a name to digest table
#[derive(Debug, Default)]
pub struct ScriptedImageResolver {
    digests: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl ScriptedImageResolver {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            digests: pairs
                .iter()
                .map(|(name, digest)| ((*name).to_string(), (*digest).to_string()))
                .collect(),
            calls: RefCell::default(),
        }
    }
}

impl ImageResolver for ScriptedImageResolver {
    fn resolve_digest(&self, reference: &str) -> Result<String> {
        self.calls.borrow_mut().push(reference.to_string());
        self.digests
            .get(reference)
            .cloned()
            .ok_or_else(|| error::resolver::failed("fake-docker", format!("unknown image {reference}")))
    }
}

/// Installer that records what it was asked to install
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    fail: bool,
    pub calls: RefCell<Vec<Vec<PathBuf>>>,
}

impl RecordingInstaller {
    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: RefCell::default(),
        }
    }
}

impl PackageInstaller for RecordingInstaller {
    fn install(&self, files: &[PathBuf]) -> Result<()> {
        // The files must exist when the installer runs.
        assert!(files.iter().all(|f| f.exists()), "installer got missing files");
        self.calls.borrow_mut().push(files.to_vec());
        if self.fail {
            return Err(error::resolver::installer_failed("fake-dpkg", "scripted failure"));
        }
        Ok(())
    }
}
