//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - apt: `apt pin` and `apt install` arguments
//! - docker: `docker pin`, `docker check` and `docker resolve` arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod apt;
pub mod completions;
pub mod docker;

pub use apt::{AptArgs, AptSubcommand};
pub use completions::CompletionsArgs;
pub use docker::{DockerArgs, DockerSubcommand};

use crate::config::DEFAULT_DOCKERFILE;
use crate::external::docker::DEFAULT_DOCKER;

/// Dockpin - pin apt packages and Docker base images
///
/// Makes Docker builds reproducible by locking apt downloads and base image digests.
#[derive(Parser, Debug)]
#[command(
    name = "dockpin",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Pin apt packages and Docker base images for reproducible builds",
    long_about = "Dockpin resolves the apt packages a Docker image installs into a lock file of exact \
                  download URLs and checksums, and pins the base images of a Dockerfile to their \
                  content digests.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  dockpin apt pin                    \x1b[90m# Lock the packages in dockpin-apt.pkgs\x1b[0m\n   \
                  dockpin apt install                \x1b[90m# Install from dockpin-apt.lock\x1b[0m\n   \
                  dockpin docker pin                 \x1b[90m# Pin FROM lines of ./Dockerfile\x1b[0m\n   \
                  dockpin docker check               \x1b[90m# Fail if a FROM digest is stale\x1b[0m\n   \
                  dockpin docker resolve ubuntu:22.04 \x1b[90m# Print ubuntu:22.04@sha256:...\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Dockerfile to read base images from (`-` for stdin/stdout)
    #[arg(
        long,
        short = 'f',
        global = true,
        env = "DOCKPIN_DOCKERFILE",
        default_value = DEFAULT_DOCKERFILE
    )]
    pub dockerfile: String,

    /// Docker executable to run
    #[arg(long, global = true, env = "DOCKPIN_DOCKER", default_value = DEFAULT_DOCKER)]
    pub docker: String,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pin and install apt packages
    Apt(AptArgs),

    /// Pin and check Docker base images
    Docker(DockerArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
