//! Error types and handling for Dockpin
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`lockfile`]: Lock file format errors
//! - [`fetch`]: Package download and verification errors
//! - [`resolver`]: External resolver and installer errors
//! - [`image`]: Base image errors

pub mod fetch;
pub mod fs;
pub mod image;
pub mod lockfile;
pub mod resolver;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Dockpin operations
#[derive(Error, Diagnostic, Debug)]
pub enum DockpinError {
    // File system errors
    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(dockpin::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(dockpin::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // Lock file errors
    #[error("Lock file is missing its header line")]
    #[diagnostic(
        code(dockpin::lockfile::missing_header),
        help("A lock file starts with '# dockpin apt lock file v1'. Run 'dockpin apt pin' to regenerate it")
    )]
    LockHeaderMissing,

    #[error("Unsupported lock file version: {version}")]
    #[diagnostic(
        code(dockpin::lockfile::unsupported_version),
        help("This dockpin understands lock file version 1 only")
    )]
    LockVersionUnsupported { version: String },

    #[error("Failed to parse line {line_number} of the lock file: {line:?}")]
    #[diagnostic(
        code(dockpin::lockfile::parse_failed),
        help("Expected '<url>' <filename> <size> MD5Sum:<32 hex digits>")
    )]
    LockLineInvalid { line_number: usize, line: String },

    #[error("Unsafe file name {file_name:?} in lock file line {line_number}")]
    #[diagnostic(
        code(dockpin::lockfile::unsafe_file_name),
        help("Package file names must not contain path separators")
    )]
    UnsafeFileName { line_number: usize, file_name: String },

    #[error("Bug: lock file generated by the resolver is invalid: {reason}")]
    #[diagnostic(
        code(dockpin::lockfile::inconsistent),
        help("The resolver output did not survive a re-parse. Please report this as a bug")
    )]
    InconsistentLockOutput { reason: String },

    // Fetch errors
    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(code(dockpin::fetch::transport_failed))]
    DownloadFailed { url: String, reason: String },

    #[error("Failed to download {url}: HTTP {status}")]
    #[diagnostic(code(dockpin::fetch::http_status))]
    HttpStatus { url: String, status: String },

    #[error("Size mismatch for {url}: {actual} bytes instead of {expected}")]
    #[diagnostic(
        code(dockpin::fetch::size_mismatch),
        help("The mirror serves a different file than the one pinned. Re-run 'dockpin apt pin'")
    )]
    SizeMismatch {
        url: String,
        expected: u64,
        actual: u64,
    },

    #[error("Hash mismatch for {url}: {actual:?} instead of {expected:?}")]
    #[diagnostic(
        code(dockpin::fetch::checksum_mismatch),
        help("The downloaded file does not match the pinned MD5 checksum")
    )]
    ChecksumMismatch {
        url: String,
        expected: String,
        actual: String,
    },

    #[error("Download of {file_name} is already in progress at {path}")]
    #[diagnostic(
        code(dockpin::fetch::in_progress),
        help("Another dockpin run is fetching this file. Remove the partial file if that run died")
    )]
    DownloadInProgress { file_name: String, path: String },

    // Resolver errors
    #[error("{program} failed: {reason}")]
    #[diagnostic(code(dockpin::resolver::failed))]
    ResolverFailed { program: String, reason: String },

    #[error("Installer {program} failed: {reason}")]
    #[diagnostic(code(dockpin::resolver::installer_failed))]
    InstallerFailed { program: String, reason: String },

    // Image errors
    #[error("No images found in your Dockerfile")]
    #[diagnostic(
        code(dockpin::image::none_found),
        help("Pass --base-image to name the image dockpin will run in")
    )]
    NoBaseImage,

    #[error("Some image(s) are not pinned at their latest digest: {}", names.join(", "))]
    #[diagnostic(
        code(dockpin::image::stale),
        help("Run 'dockpin docker pin' to update the digests")
    )]
    StaleImages { names: Vec<String> },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DockpinError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_code() {
        let err = DockpinError::LockHeaderMissing;
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("dockpin::lockfile::missing_header".to_string())
        );
    }

    test_error_contains!(
        test_lock_line_invalid_quotes_line,
        lockfile::line_invalid(4, "'http://x' f.deb 1 MD5Sum:abc"),
        "line 4",
        "'http://x' f.deb 1 MD5Sum:abc"
    );

    test_error_contains!(
        test_size_mismatch_names_both_sizes,
        fetch::size_mismatch("http://x/f.deb", 10, 9),
        "http://x/f.deb",
        "9 bytes instead of 10"
    );

    test_error_contains!(
        test_checksum_mismatch_names_both_digests,
        fetch::checksum_mismatch("http://x/f.deb", "aaaa", "bbbb"),
        "\"bbbb\" instead of \"aaaa\""
    );

    test_error_contains!(
        test_http_status_names_url,
        fetch::http_status("http://x/f.deb", "404 Not Found"),
        "http://x/f.deb",
        "HTTP 404 Not Found"
    );

    test_error_contains!(
        test_stale_images_lists_names,
        image::stale(vec!["ubuntu:20.04".to_string(), "alpine".to_string()]),
        "ubuntu:20.04, alpine"
    );

    test_error_contains!(
        test_no_base_image,
        DockpinError::NoBaseImage,
        "No images found in your Dockerfile"
    );

    test_error_contains!(
        test_inconsistent_output_is_reported_as_bug,
        lockfile::inconsistent("bad line"),
        "Bug:",
        "bad line"
    );
}
