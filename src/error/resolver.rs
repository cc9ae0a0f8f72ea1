//! External resolver and installer errors

use super::DockpinError;

/// Creates a resolver failure error
pub fn failed(program: impl Into<String>, reason: impl ToString) -> DockpinError {
    DockpinError::ResolverFailed {
        program: program.into(),
        reason: reason.to_string(),
    }
}

/// Creates an installer failure error
pub fn installer_failed(program: impl Into<String>, reason: impl ToString) -> DockpinError {
    DockpinError::InstallerFailed {
        program: program.into(),
        reason: reason.to_string(),
    }
}
