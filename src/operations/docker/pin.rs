//! `dockpin docker pin` workflow

use console::Style;

use super::{ImageOptions, resolve_digests};
use crate::dockerfile;
use crate::error::Result;
use crate::external::ImageResolver;

/// Orchestrator for `docker pin`
pub struct ImagePinOperation<'a, R: ImageResolver> {
    resolver: &'a R,
    options: ImageOptions,
}

impl<'a, R: ImageResolver> ImagePinOperation<'a, R> {
    pub fn new(resolver: &'a R, options: ImageOptions) -> Self {
        Self { resolver, options }
    }

    /// Pin every base image to its current digest and write the Dockerfile back
    pub fn execute(&self) -> Result<Vec<u8>> {
        let text = self.options.dockerfile.read()?;
        let references = dockerfile::scan(&text);
        let digests = resolve_digests(self.resolver, &references)?;

        let rewritten = dockerfile::rewrite(&text, &digests);
        self.options.dockerfile.write(&rewritten)?;
        if !self.options.dockerfile.is_stdio() {
            eprintln!(
                "{} {} base image(s) in {}",
                Style::new().bold().green().apply_to("Pinned"),
                references.len(),
                self.options.dockerfile
            );
        }
        Ok(rewritten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilePath;
    use crate::external::fake::ScriptedImageResolver;
    use tempfile::TempDir;

    fn write_dockerfile(content: &[u8]) -> (TempDir, ImageOptions) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Dockerfile");
        std::fs::write(&path, content).unwrap();
        let options = ImageOptions {
            dockerfile: FilePath::from(path),
        };
        (temp, options)
    }

    fn run(dockerfile: &[u8], resolver: &ScriptedImageResolver) -> (TempDir, Result<Vec<u8>>) {
        let (temp, options) = write_dockerfile(dockerfile);
        let result = ImagePinOperation::new(resolver, options).execute();
        (temp, result)
    }

    #[test]
    fn test_pin_rewrites_file_in_place() {
        let resolver = ScriptedImageResolver::new(&[("ubuntu:20.04", "sha256:deadbeef")]);
        let (temp, result) = run(b"FROM ubuntu:20.04 AS build\nRUN make\n", &resolver);

        let expected = b"FROM ubuntu:20.04@sha256:deadbeef AS build\nRUN make\n";
        assert_eq!(result.unwrap(), expected);
        assert_eq!(std::fs::read(temp.path().join("Dockerfile")).unwrap(), expected);
    }

    #[test]
    fn test_pin_replaces_stale_digest() {
        let resolver = ScriptedImageResolver::new(&[("alpine:3.19", "sha256:new")]);
        let (_temp, result) = run(b"FROM alpine:3.19@sha256:old\n", &resolver);
        assert_eq!(result.unwrap(), b"FROM alpine:3.19@sha256:new\n");
    }

    #[test]
    fn test_pin_scratch_only_needs_no_resolver() {
        let resolver = ScriptedImageResolver::new(&[]);
        let (_temp, result) = run(b"FROM scratch\nCOPY app /\n", &resolver);
        assert_eq!(result.unwrap(), b"FROM scratch\nCOPY app /\n");
        assert!(resolver.calls.borrow().is_empty());
    }

    #[test]
    fn test_pin_resolver_failure_leaves_file_untouched() {
        let resolver = ScriptedImageResolver::new(&[]);
        let (temp, result) = run(b"FROM private/image:1\n", &resolver);
        assert!(result.is_err());
        assert_eq!(
            std::fs::read(temp.path().join("Dockerfile")).unwrap(),
            b"FROM private/image:1\n"
        );
    }

    #[test]
    fn test_pin_latin1_comment_survives() {
        let resolver = ScriptedImageResolver::new(&[("alpine", "sha256:beef")]);
        let (temp, result) = run(b"# caf\xe9\nFROM alpine\n", &resolver);

        let expected = b"# caf\xe9\nFROM alpine@sha256:beef\n";
        assert_eq!(result.unwrap(), expected);
        assert_eq!(std::fs::read(temp.path().join("Dockerfile")).unwrap(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_pin_keeps_dockerfile_mode() {
        use std::os::unix::fs::PermissionsExt;

        let resolver = ScriptedImageResolver::new(&[("alpine", "sha256:beef")]);
        let (temp, options) = write_dockerfile(b"FROM alpine\n");
        let path = temp.path().join("Dockerfile");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        ImagePinOperation::new(&resolver, options).execute().unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
