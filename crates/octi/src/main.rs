//! Octi generates embeddable Rust DOM trees for the Octicons icon set.

mod args;
mod fetch;

use clap::Parser;
use log::LevelFilter;

use crate::args::Args;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .init();
    let args = Args::parse();

    args.run()
}
