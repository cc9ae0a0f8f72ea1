//! File system errors

use super::DockpinError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl ToString) -> DockpinError {
    DockpinError::FileReadFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl ToString) -> DockpinError {
    DockpinError::FileWriteFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}
