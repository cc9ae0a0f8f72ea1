//! External tools Dockpin delegates to
//!
//! - [`PackageResolver`]: asks apt, inside the target image, which package
//!   files it would download
//! - [`ImageResolver`]: looks up the current digest of an image reference
//! - [`PackageInstaller`]: installs downloaded package files
//!
//! Real implementations shell out to `docker` and `dpkg`; tests use the
//! scripted fakes in `fake`.

pub mod docker;
pub mod dpkg;

#[cfg(test)]
pub mod fake;

use std::path::PathBuf;

use crate::error::Result;

pub use docker::DockerCli;
pub use dpkg::Dpkg;

/// Resolves package names to apt acquisition records
pub trait PackageResolver {
    /// Raw `apt-get install --print-uris` output for `packages`, as resolved
    /// inside a throwaway container of `base_image`
    fn print_uris(&self, base_image: &str, packages: &[String]) -> Result<String>;
}

/// Resolves image references to content digests
pub trait ImageResolver {
    /// Current digest (e.g. `sha256:...`) of `reference`
    fn resolve_digest(&self, reference: &str) -> Result<String>;
}

/// Installs local package files
pub trait PackageInstaller {
    fn install(&self, files: &[PathBuf]) -> Result<()>;
}
