//! Command implementations for Dockpin CLI

pub mod apt;
pub mod completions;
pub mod docker;
pub mod version;
