//! This crate contains the source code for the binary for the maze generator mazecarve.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazecarve::cli::{self, Args};

fn main() -> Result<()> {
    install()?;
    cli::init_logging()?;

    let args = Args::parse();
    cli::run(&args, &mut io::stdout().lock())?;

    Ok(())
}
