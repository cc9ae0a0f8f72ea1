//! Configuration and file handling for Dockpin
//!
//! This module contains:
//! - `dockpin-apt.lock` - Lock file with pinned package acquisition records
//! - [`FilePath`] - Paths that may name standard input/output via `-`

pub mod lockfile;

use std::fmt;
use std::fs::{self, Permissions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{self, Result};

// Re-export commonly used types
pub use lockfile::{AcquisitionRecord, LockDocument};

/// Default lock file name
pub const DEFAULT_LOCK_FILE: &str = "dockpin-apt.lock";

/// Default package selection file name
pub const DEFAULT_SELECTION_FILE: &str = "dockpin-apt.pkgs";

/// Default Dockerfile name
pub const DEFAULT_DOCKERFILE: &str = "Dockerfile";

/// A file argument where `-` means standard input (when reading)
/// or standard output (when writing)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePath {
    Stdio,
    Path(PathBuf),
}

impl FilePath {
    pub fn is_stdio(&self) -> bool {
        matches!(self, FilePath::Stdio)
    }

    /// Read the whole file (or stdin) as raw bytes
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            FilePath::Stdio => {
                let mut content = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut content)
                    .map_err(|e| error::fs::read_failed(self.to_string(), e))?;
                Ok(content)
            }
            FilePath::Path(path) => {
                fs::read(path).map_err(|e| error::fs::read_failed(self.to_string(), e))
            }
        }
    }

    /// Write content to the file (or stdout)
    pub fn write(&self, content: &[u8]) -> Result<()> {
        match self {
            FilePath::Stdio => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(content)
                    .and_then(|()| stdout.flush())
                    .map_err(|e| error::fs::write_failed(self.to_string(), e))
            }
            FilePath::Path(path) => write_atomic(path, content),
        }
    }
}

impl From<&str> for FilePath {
    fn from(value: &str) -> Self {
        if value == "-" {
            FilePath::Stdio
        } else {
            FilePath::Path(PathBuf::from(value))
        }
    }
}

impl From<PathBuf> for FilePath {
    fn from(value: PathBuf) -> Self {
        if value.as_os_str() == "-" {
            FilePath::Stdio
        } else {
            FilePath::Path(value)
        }
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilePath::Stdio => f.write_str("-"),
            FilePath::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Mode for files that did not exist before
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Replace a file's content via a temporary sibling and a rename, so readers
/// never observe a half-written file
///
/// The replaced file keeps its permissions and a symlink keeps pointing at
/// the (rewritten) file it named.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let display = path.display().to_string();
    let target = resolve_symlink(path).map_err(|e| error::fs::write_failed(&display, e))?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp =
        tempfile::NamedTempFile::new_in(dir).map_err(|e| error::fs::write_failed(&display, e))?;
    temp.write_all(content)
        .map_err(|e| error::fs::write_failed(&display, e))?;
    if let Some(permissions) =
        target_permissions(&target).map_err(|e| error::fs::write_failed(&display, e))?
    {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| error::fs::write_failed(&display, e))?;
    }
    temp.persist(&target)
        .map_err(|e| error::fs::write_failed(&display, e.error))?;
    Ok(())
}

fn resolve_symlink(path: &Path) -> std::io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => fs::canonicalize(path),
        Ok(_) => Ok(path.to_path_buf()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}

/// Permissions the rewritten file should carry, `None` to keep the default
fn target_permissions(target: &Path) -> std::io::Result<Option<Permissions>> {
    match fs::metadata(target) {
        Ok(metadata) => Ok(Some(metadata.permissions())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(new_file_permissions()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dash_is_stdio() {
        assert_eq!(FilePath::from("-"), FilePath::Stdio);
        assert_eq!(FilePath::from(PathBuf::from("-")), FilePath::Stdio);
        assert!(FilePath::from("-").is_stdio());
    }

    #[test]
    fn test_regular_path() {
        let path = FilePath::from("Dockerfile");
        assert_eq!(path, FilePath::Path(PathBuf::from("Dockerfile")));
        assert_eq!(path.to_string(), "Dockerfile");
    }

    #[test]
    fn test_write_then_read() {
        let temp = TempDir::new().unwrap();
        let path = FilePath::from(temp.path().join("out.txt"));
        path.write(b"FROM ubuntu\n").unwrap();
        assert_eq!(path.read().unwrap(), b"FROM ubuntu\n");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lock");
        std::fs::write(&path, "old").unwrap();
        write_atomic(&path, b"new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let err = FilePath::from("/nonexistent/Dockerfile")
            .read()
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/Dockerfile"));
    }

    #[test]
    fn test_read_keeps_non_utf8_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Dockerfile");
        std::fs::write(&path, b"# caf\xe9\nFROM alpine\n").unwrap();
        assert_eq!(
            FilePath::from(path).read().unwrap(),
            b"# caf\xe9\nFROM alpine\n"
        );
    }

    #[cfg(unix)]
    mod permissions {
        use super::*;
        use std::os::unix::fs::{PermissionsExt, symlink};

        fn mode(path: &Path) -> u32 {
            std::fs::metadata(path).unwrap().permissions().mode() & 0o777
        }

        #[test]
        fn test_write_atomic_keeps_existing_mode() {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("Dockerfile");
            std::fs::write(&path, "old").unwrap();
            std::fs::set_permissions(&path, Permissions::from_mode(0o640)).unwrap();

            write_atomic(&path, b"new").unwrap();

            assert_eq!(mode(&path), 0o640);
            assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        }

        #[test]
        fn test_write_atomic_new_file_is_world_readable() {
            let temp = TempDir::new().unwrap();
            let path = temp.path().join("dockpin-apt.lock");

            write_atomic(&path, b"# dockpin apt lock file v1\n").unwrap();

            assert_eq!(mode(&path), 0o644);
        }

        #[test]
        fn test_write_atomic_follows_symlink() {
            let temp = TempDir::new().unwrap();
            std::fs::create_dir(temp.path().join("shared")).unwrap();
            let target = temp.path().join("shared/Dockerfile");
            let link = temp.path().join("Dockerfile");
            std::fs::write(&target, "old").unwrap();
            symlink(&target, &link).unwrap();

            write_atomic(&link, b"new").unwrap();

            assert!(
                std::fs::symlink_metadata(&link)
                    .unwrap()
                    .file_type()
                    .is_symlink()
            );
            assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
        }
    }
}
