//! `dockpin docker check` workflow

use std::collections::HashMap;

use console::Style;

use super::{ImageOptions, resolve_digests};
use crate::dockerfile::{self, BaseImageReference};
use crate::error::{self, Result};
use crate::external::ImageResolver;

/// Orchestrator for `docker check`
pub struct ImageCheckOperation<'a, R: ImageResolver> {
    resolver: &'a R,
    options: ImageOptions,
}

impl<'a, R: ImageResolver> ImageCheckOperation<'a, R> {
    pub fn new(resolver: &'a R, options: ImageOptions) -> Self {
        Self { resolver, options }
    }

    /// Fail unless every base image carries its current digest
    pub fn execute(&self) -> Result<()> {
        let text = self.options.dockerfile.read()?;
        let references = dockerfile::scan(&text);
        let digests = resolve_digests(self.resolver, &references)?;

        let mut stale: Vec<String> = Vec::new();
        for reference in &references {
            if is_current(reference, &digests) {
                continue;
            }

            eprintln!(
                "{} is not at its latest! (line {})",
                Style::new().bold().yellow().apply_to(&reference.name),
                reference.line + 1
            );
            if !stale.contains(&reference.name) {
                stale.push(reference.name.clone());
            }
        }

        if stale.is_empty() {
            Ok(())
        } else {
            Err(error::image::stale(stale))
        }
    }
}

/// A name missing from `digests` counts as stale
fn is_current(reference: &BaseImageReference, digests: &HashMap<String, String>) -> bool {
    digests
        .get(&reference.name)
        .is_some_and(|current| reference.is_pinned_to(current))
}
