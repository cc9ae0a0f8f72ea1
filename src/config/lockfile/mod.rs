//! Apt lock file (dockpin-apt.lock)
//!
//! The lock file stores the exact download URL, size and MD5 checksum of
//! every package apt resolved during `dockpin apt pin`:
//!
//! ```text
//! # dockpin apt lock file v1
//! base-image=debian:bookworm
//!
//! 'http://deb.debian.org/debian/pool/main/c/curl/curl_7.88.1-10_amd64.deb' curl_7.88.1-10_amd64.deb 315788 MD5Sum:9a4f0c...
//! ```
//!
//! Record lines are apt's own `--print-uris` output, written verbatim.

pub mod record;


use std::sync::LazyLock;

use regex::Regex;

use crate::error::{self, DockpinError, Result};

pub use record::AcquisitionRecord;

/// First line of every lock file this version writes
pub const LOCK_HEADER: &str = "# dockpin apt lock file v1";

const HEADER_PREFIX: &str = "# dockpin apt lock file v";

const SUPPORTED_VERSION: &str = "1";

/// Metadata key recording the image the packages were resolved in
pub const BASE_IMAGE_KEY: &str = "base-image=";

static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^'([^']+)'\s+(\S+)\s+(\d+)\s+MD5Sum:([0-9a-f]{32})\s*$")
        .expect("record pattern is valid")
});

/// Parsed lock file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockDocument {
    /// Image the records were resolved in (documentation only)
    pub base_image: Option<String>,

    /// Pinned packages in apt's install order
    pub records: Vec<AcquisitionRecord>,
}

impl LockDocument {
    pub fn new(base_image: Option<String>, records: Vec<AcquisitionRecord>) -> Self {
        Self {
            base_image,
            records,
        }
    }

    /// Header, optional metadata line and blank separator
    pub fn preamble(base_image: Option<&str>) -> String {
        let mut text = String::from(LOCK_HEADER);
        text.push('\n');
        if let Some(image) = base_image {
            text.push_str(BASE_IMAGE_KEY);
            text.push_str(image);
            text.push('\n');
        }
        text.push('\n');
        text
    }

    /// Render the document in lock file format
    pub fn format(&self) -> String {
        let mut text = Self::preamble(self.base_image.as_deref());
        for record in &self.records {
            text.push_str(&record.to_string());
            text.push('\n');
        }
        text
    }

    /// Parse lock file text
    ///
    /// Blank lines and `#` comments are skipped. Every other line must be the
    /// metadata line or a record, otherwise the whole document is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let mut base_image = None;
        let mut records = Vec::new();
        let mut header_seen = false;

        for (index, line) in text.split('\n').enumerate() {
            let line_number = index + 1;
            if line.is_empty() {
                continue;
            }

            if !header_seen {
                check_header(line)?;
                header_seen = true;
                continue;
            }

            if line.starts_with('#') {
                continue;
            }

            if let Some(image) = line.strip_prefix(BASE_IMAGE_KEY) {
                base_image = Some(image.to_string());
                continue;
            }

            records.push(parse_record(line_number, line)?);
        }

        if !header_seen {
            return Err(DockpinError::LockHeaderMissing);
        }

        Ok(Self::new(base_image, records))
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn check_header(line: &str) -> Result<()> {
    let Some(version) = line.strip_prefix(HEADER_PREFIX) else {
        return Err(DockpinError::LockHeaderMissing);
    };

    if version.trim_end() != SUPPORTED_VERSION {
        return Err(DockpinError::LockVersionUnsupported {
            version: version.trim_end().to_string(),
        });
    }

    Ok(())
}

fn parse_record(line_number: usize, line: &str) -> Result<AcquisitionRecord> {
    let captures = RECORD_RE
        .captures(line)
        .ok_or_else(|| error::lockfile::line_invalid(line_number, line))?;

    let file_name = &captures[2];
    if !record::is_safe_file_name(file_name) {
        return Err(error::lockfile::unsafe_file_name(line_number, file_name));
    }

    // The pattern admits only digits, so this fails on overflow alone.
    let size = captures[3]
        .parse::<u64>()
        .map_err(|_| error::lockfile::line_invalid(line_number, line))?;

    Ok(AcquisitionRecord::new(
        &captures[1],
        file_name,
        size,
        &captures[4],
    ))
}
