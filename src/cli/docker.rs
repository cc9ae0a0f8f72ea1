use clap::{Parser, Subcommand};

/// Arguments for docker command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Pin every FROM line of ./Dockerfile:\n    dockpin docker pin\n\n\
                  Pin a Dockerfile read from stdin:\n    dockpin docker pin -f - < Dockerfile > Dockerfile.pinned\n\n\
                  Fail in CI when a digest is outdated:\n    dockpin docker check\n\n\
                  Print the current digest of an image:\n    dockpin docker resolve ubuntu:22.04")]
pub struct DockerArgs {
    #[command(subcommand)]
    pub command: DockerSubcommand,
}

/// Docker subcommands
#[derive(Subcommand, Debug)]
pub enum DockerSubcommand {
    /// Pin base images in the Dockerfile to their current digests
    Pin,

    /// Check that base images are pinned to their current digests
    Check,

    /// Print an image reference with its current digest
    Resolve(ResolveArgs),
}

/// Arguments for docker resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Image reference (e.g. ubuntu:22.04)
    pub image: String,
}
