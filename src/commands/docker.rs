//! `dockpin docker` command

use crate::cli::{DockerArgs, DockerSubcommand};
use crate::config::FilePath;
use crate::error::Result;
use crate::external::DockerCli;
use crate::operations::docker::resolve_reference;
use crate::operations::{ImageCheckOperation, ImageOptions, ImagePinOperation};

/// Run docker command
pub fn run(dockerfile: &str, docker: &str, args: DockerArgs) -> Result<()> {
    let resolver = DockerCli::new(docker);
    let options = ImageOptions {
        dockerfile: FilePath::from(dockerfile),
    };

    match args.command {
        DockerSubcommand::Pin => {
            ImagePinOperation::new(&resolver, options).execute()?;
        }
        DockerSubcommand::Check => {
            ImageCheckOperation::new(&resolver, options).execute()?;
        }
        DockerSubcommand::Resolve(resolve_args) => {
            println!("{}", resolve_reference(&resolver, &resolve_args.image)?);
        }
    }
    Ok(())
}
