//! Docker base image pinning and checking

pub mod check;
pub mod pin;

use std::collections::HashMap;

use console::Style;

use crate::config::FilePath;
use crate::dockerfile::{self, BaseImageReference};
use crate::error::Result;
use crate::external::ImageResolver;

pub use check::ImageCheckOperation;
pub use pin::ImagePinOperation;

/// Options shared by the image operations
#[derive(Debug, Clone)]
pub struct ImageOptions {
    /// Dockerfile to scan (`-` for stdin/stdout)
    pub dockerfile: FilePath,
}

/// Resolve each distinct image name once, in order of first appearance
pub(crate) fn resolve_digests<R: ImageResolver>(
    resolver: &R,
    references: &[BaseImageReference],
) -> Result<HashMap<String, String>> {
    let mut digests = HashMap::new();
    for name in dockerfile::distinct_names(references) {
        eprintln!(
            "{} digest of {}...",
            Style::new().bold().cyan().apply_to("Resolving"),
            name
        );
        let digest = resolver.resolve_digest(name)?;
        digests.insert(name.to_string(), digest);
    }
    Ok(digests)
}

/// `image@digest` for the current digest of `image`
///
/// A digest already present on `image` is dropped before resolving.
pub fn resolve_reference<R: ImageResolver>(resolver: &R, image: &str) -> Result<String> {
    let name = image.split_once('@').map_or(image, |(name, _)| name);
    let digest = resolver.resolve_digest(name)?;
    Ok(format!("{name}@{digest}"))
}
