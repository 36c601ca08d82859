//! Flashwrite CLI - write-optimized flashing of images onto files, block
//! devices, and UBI volumes.

mod cli;
mod error;
mod output;
mod run;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    run::execute(&cli, &*formatter)
}
