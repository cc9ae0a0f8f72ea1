//! Operations module for pinning and installing
//!
//! This module provides the workflows behind each command:
//! - `apt::AptPinOperation`: Resolve selected packages into a lock file
//! - `apt::AptInstallOperation`: Fetch, verify and install locked packages
//! - `docker::ImagePinOperation`: Write current digests into a Dockerfile
//! - `docker::ImageCheckOperation`: Fail when a Dockerfile digest is stale
//!
//! The operations coordinate with:
//! - Lock file format (from config module)
//! - Verified fetcher (from cache module)
//! - Reference scanner (from dockerfile module)
//! - External resolvers and installer (from external module)

pub mod apt;
pub mod docker;

pub use apt::{AptInstallOperation, AptInstallOptions, AptPinOperation, AptPinOptions};
pub use docker::{ImageCheckOperation, ImageOptions, ImagePinOperation};
