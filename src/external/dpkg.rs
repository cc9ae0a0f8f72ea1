//! dpkg backed package installer

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::PackageInstaller;
use crate::error::{self, Result};

/// Default installer executable
pub const DEFAULT_DPKG: &str = "dpkg";

/// Installs `.deb` files with `dpkg -i`, sharing this process's stdout/stderr
#[derive(Debug, Clone)]
pub struct Dpkg {
    program: String,
}

impl Dpkg {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Dpkg {
    fn default() -> Self {
        Self::new(DEFAULT_DPKG)
    }
}

impl PackageInstaller for Dpkg {
    fn install(&self, files: &[PathBuf]) -> Result<()> {
        debug!(program = %self.program, count = files.len(), "installing packages");

        let status = Command::new(&self.program)
            .arg("-i")
            .args(files)
            .status()
            .map_err(|e| error::resolver::installer_failed(&self.program, e))?;

        if !status.success() {
            return Err(error::resolver::installer_failed(
                &self.program,
                format!("exited with {status}"),
            ));
        }
        Ok(())
    }
}
