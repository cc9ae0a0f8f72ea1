//! `dockpin apt` command

use tracing::debug;

use crate::cache::ArchiveDir;
use crate::cli::apt::{AptInstallArgs, AptPinArgs};
use crate::cli::{AptArgs, AptSubcommand};
use crate::config::FilePath;
use crate::error::Result;
use crate::external::{DockerCli, Dpkg};
use crate::operations::{AptInstallOperation, AptInstallOptions, AptPinOperation, AptPinOptions};

/// Run apt command
pub fn run(dockerfile: &str, docker: &str, args: AptArgs) -> Result<()> {
    match args.command {
        AptSubcommand::Pin(pin_args) => {
            let resolver = DockerCli::new(docker);
            let options = pin_options(pin_args, dockerfile);
            debug!(?options, "apt pin");
            AptPinOperation::new(&resolver, options).execute()?;
        }
        AptSubcommand::Install(install_args) => {
            let installer = Dpkg::default();
            let options = install_options(install_args);
            debug!(?options, "apt install");
            AptInstallOperation::new(&installer, options).execute()?;
        }
    }
    Ok(())
}

fn pin_options(args: AptPinArgs, dockerfile: &str) -> AptPinOptions {
    AptPinOptions {
        selection_file: args.selection_file,
        lock_file: args.lock_file,
        base_image: args.base_image,
        dockerfile: FilePath::from(dockerfile),
    }
}

fn install_options(args: AptInstallArgs) -> AptInstallOptions {
    AptInstallOptions {
        lock_file: args.lock_file,
        archive: ArchiveDir::new(args.archive_dir),
    }
}
