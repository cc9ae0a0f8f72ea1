use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cache::paths::DEFAULT_ARCHIVE_DIR;
use crate::config::{DEFAULT_LOCK_FILE, DEFAULT_SELECTION_FILE};

/// Arguments for apt command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Lock the packages listed in dockpin-apt.pkgs:\n    dockpin apt pin\n\n\
                  Resolve against an explicit image:\n    dockpin apt pin --base-image debian:bookworm\n\n\
                  Install the locked packages (inside the image):\n    dockpin apt install")]
pub struct AptArgs {
    #[command(subcommand)]
    pub command: AptSubcommand,
}

/// Apt subcommands
#[derive(Subcommand, Debug)]
pub enum AptSubcommand {
    /// Resolve selected packages into a lock file
    Pin(AptPinArgs),

    /// Download, verify and install locked packages
    Install(AptInstallArgs),
}

/// Arguments for apt pin command
#[derive(Parser, Debug)]
pub struct AptPinArgs {
    /// Lock file to write
    #[arg(long = "pin-file", short = 'p', default_value = DEFAULT_LOCK_FILE)]
    pub lock_file: PathBuf,

    /// File listing the packages to lock, one per line
    #[arg(long, short = 's', default_value = DEFAULT_SELECTION_FILE)]
    pub selection_file: PathBuf,

    /// Image to resolve packages in (defaults to the last FROM of the Dockerfile)
    #[arg(long)]
    pub base_image: Option<String>,
}

/// Arguments for apt install command
#[derive(Parser, Debug)]
pub struct AptInstallArgs {
    /// Lock file to install from
    #[arg(long = "pin-file", short = 'p', default_value = DEFAULT_LOCK_FILE)]
    pub lock_file: PathBuf,

    /// Directory package files are downloaded to
    #[arg(long, default_value = DEFAULT_ARCHIVE_DIR)]
    pub archive_dir: PathBuf,
}
