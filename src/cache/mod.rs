//! Package archive cache for Dockpin
//!
//! Packages pinned in the lock file are downloaded into apt's own archive
//! directory, so `dpkg` and later apt runs can reuse them.
//!
//! ## Cache Structure
//!
//! ```text
//! /var/cache/apt/archives/
//! ├── <file_name>.deb        verified downloads only
//! └── partial/
//!     └── <file_name>.deb    in-flight downloads
//! ```
//!
//! A file appears at the top level only after its size and MD5 checksum
//! matched the lock file; it is moved there from `partial/` with a rename.

pub mod fetch;
pub mod paths;

pub use fetch::Fetcher;
pub use paths::ArchiveDir;
