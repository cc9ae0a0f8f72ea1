//! Base image errors

use super::DockpinError;

/// Creates a stale images error
pub fn stale(names: Vec<String>) -> DockpinError {
    DockpinError::StaleImages { names }
}
