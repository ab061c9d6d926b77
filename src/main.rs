mod cli;
mod logging;
mod pacing;
mod payload;
mod pipeline;

use clap::Parser;
use std::error::Error;

use cli::{Cli, Command};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;
    match &cli.command {
        Command::Mesh(args) => pipeline::run_mesh(args),
        Command::Animate(args) => pipeline::run_animate(args),
    }
}
