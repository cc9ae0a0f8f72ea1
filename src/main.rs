//! Dockpin - reproducible Docker builds
//!
//! Locks the apt packages an image installs to exact downloads with
//! checksums, and pins Dockerfile base images to their content digests.

use clap::Parser;

mod cache;
mod cli;
mod commands;
mod config;
mod dockerfile;
mod error;
mod external;
mod hash;
mod logging;
mod operations;
mod progress;
mod transaction;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Apt(args) => commands::apt::run(&cli.dockerfile, &cli.docker, args),
        Commands::Docker(args) => commands::docker::run(&cli.dockerfile, &cli.docker, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
