//! Docker CLI backed resolvers

use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::debug;

use super::{ImageResolver, PackageResolver};
use crate::error::{self, Result};

/// Default docker executable
pub const DEFAULT_DOCKER: &str = "docker";

/// Resolver that runs the `docker` CLI
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
}

impl DockerCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new(DEFAULT_DOCKER)
    }
}

/// Shell script that updates the package index and prints the download URIs
/// of `packages` and their missing dependencies on stdout
pub fn apt_script(packages: &[String]) -> String {
    let mut script = String::from(
        "apt-get update >&2 && echo Determining dependencies... >&2 && \
         apt-get install --print-uris -qq --no-install-recommends",
    );
    for package in packages {
        script.push(' ');
        script.push_str(&shell_words::quote(package));
    }
    script
}

#[derive(Debug, Deserialize)]
struct ManifestDescriptor {
    digest: String,
}

/// Extract the digest from `imagetools inspect --format '{{json .Manifest}}'` output
pub fn parse_manifest_digest(output: &str) -> std::result::Result<String, String> {
    let descriptor: ManifestDescriptor =
        serde_json::from_str(output.trim()).map_err(|e| e.to_string())?;
    if descriptor.digest.is_empty() {
        return Err("inspect output carries an empty digest".to_string());
    }
    Ok(descriptor.digest)
}

impl PackageResolver for DockerCli {
    fn print_uris(&self, base_image: &str, packages: &[String]) -> Result<String> {
        let script = apt_script(packages);
        debug!(program = %self.program, image = base_image, %script, "resolving packages");

        let output = Command::new(&self.program)
            .args(["run", "--rm", base_image, "bash", "-c", script.as_str()])
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| error::resolver::failed(&self.program, e))?;

        if !output.status.success() {
            return Err(error::resolver::failed(
                &self.program,
                format!("apt resolution in {base_image} exited with {}", output.status),
            ));
        }

        String::from_utf8(output.stdout).map_err(|e| error::resolver::failed(&self.program, e))
    }
}

impl ImageResolver for DockerCli {
    fn resolve_digest(&self, reference: &str) -> Result<String> {
        debug!(program = %self.program, reference, "inspecting image");

        let output = Command::new(&self.program)
            .args([
                "buildx",
                "imagetools",
                "inspect",
                reference,
                "--format",
                "{{json .Manifest}}",
            ])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| error::resolver::failed(&self.program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(error::resolver::failed(
                &self.program,
                format!("inspecting {reference}: {}", stderr.trim()),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_manifest_digest(&stdout).map_err(|reason| {
            error::resolver::failed(&self.program, format!("inspecting {reference}: {reason}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apt_script_quotes_packages() {
        let script = apt_script(&["curl".to_string(), "libfoo; rm -rf /".to_string()]);
        assert!(script.starts_with("apt-get update >&2 && "));
        assert!(script.contains("--print-uris -qq --no-install-recommends curl 'libfoo; rm -rf /'"));
    }

    #[test]
    fn test_apt_script_without_packages() {
        assert!(apt_script(&[]).ends_with("--no-install-recommends"));
    }

    #[test]
    fn test_parse_manifest_digest() {
        let output = r#"{
  "schemaVersion": 2,
  "mediaType": "application/vnd.oci.image.index.v1+json",
  "digest": "sha256:4b7ce07002c69e8f3d704a9c5d6fd3053be500b7f1c69fc0d80990c2ad8dd412",
  "size": 9218,
  "manifests": []
}
"#;
        assert_eq!(
            parse_manifest_digest(output).unwrap(),
            "sha256:4b7ce07002c69e8f3d704a9c5d6fd3053be500b7f1c69fc0d80990c2ad8dd412"
        );
    }

    #[test]
    fn test_parse_manifest_digest_rejects_garbage() {
        assert!(parse_manifest_digest("not json").is_err());
        assert!(parse_manifest_digest(r#"{"digest": ""}"#).is_err());
        assert!(parse_manifest_digest(r#"{"size": 1}"#).is_err());
    }

    #[test]
    fn test_missing_program_is_resolver_error() {
        let docker = DockerCli::new("/nonexistent/docker");
        let err = docker.resolve_digest("alpine").unwrap_err();
        assert!(matches!(err, crate::error::DockpinError::ResolverFailed { .. }));
        assert!(err.to_string().contains("/nonexistent/docker"));
    }
}
