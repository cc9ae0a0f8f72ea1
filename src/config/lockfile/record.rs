//! `AcquisitionRecord` struct for the lock file
//!
//! One pinned package as printed by `apt-get install --print-uris`.

use std::fmt;

/// A pinned package download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquisitionRecord {
    /// Download URL
    pub url: String,

    /// Archive file name (never contains a path separator)
    pub file_name: String,

    /// Declared size in bytes
    pub size: u64,

    /// Lowercase hex MD5 of the archive
    pub md5: String,
}

impl AcquisitionRecord {
    pub fn new(
        url: impl Into<String>,
        file_name: impl Into<String>,
        size: u64,
        md5: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            file_name: file_name.into(),
            size,
            md5: md5.into(),
        }
    }
}

/// Renders the record in apt's `--print-uris` line shape
impl fmt::Display for AcquisitionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' {} {} MD5Sum:{}",
            self.url, self.file_name, self.size, self.md5
        )
    }
}

/// Whether a file name can be joined onto a directory without escaping it
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
