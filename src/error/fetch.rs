//! Package download errors

use super::DockpinError;

/// Creates a transport failure error
pub fn download_failed(url: impl Into<String>, reason: impl ToString) -> DockpinError {
    DockpinError::DownloadFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates a non-success HTTP status error
pub fn http_status(url: impl Into<String>, status: impl ToString) -> DockpinError {
    DockpinError::HttpStatus {
        url: url.into(),
        status: status.to_string(),
    }
}

/// Creates a size mismatch error
pub fn size_mismatch(url: impl Into<String>, expected: u64, actual: u64) -> DockpinError {
    DockpinError::SizeMismatch {
        url: url.into(),
        expected,
        actual,
    }
}

/// Creates a checksum mismatch error
pub fn checksum_mismatch(
    url: impl Into<String>,
    expected: impl Into<String>,
    actual: impl Into<String>,
) -> DockpinError {
    DockpinError::ChecksumMismatch {
        url: url.into(),
        expected: expected.into(),
        actual: actual.into(),
    }
}
