//! Lock file errors

use super::DockpinError;

/// Creates an invalid lock line error quoting the offending line
pub fn line_invalid(line_number: usize, line: impl Into<String>) -> DockpinError {
    DockpinError::LockLineInvalid {
        line_number,
        line: line.into(),
    }
}

/// Creates an unsafe file name error
pub fn unsafe_file_name(line_number: usize, file_name: impl Into<String>) -> DockpinError {
    DockpinError::UnsafeFileName {
        line_number,
        file_name: file_name.into(),
    }
}

/// Creates an internal consistency error for resolver output that fails to re-parse
pub fn inconsistent(reason: impl ToString) -> DockpinError {
    DockpinError::InconsistentLockOutput {
        reason: reason.to_string(),
    }
}
