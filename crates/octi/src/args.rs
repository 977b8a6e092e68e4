use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use octi_codegen::{generate, Options};

use crate::fetch::{fetch_catalog, CATALOG_URL};

#[derive(Parser)]
#[clap(
    bin_name = "octi",
    name = "octi",
    author,
    version,
    about = "Generates embeddable Rust DOM trees for the Octicons icon set",
    long_about = None
)]
pub struct Args {
    /// The file to write the generated source to.
    /// Defaults to stdout
    #[clap(long = "output", short = 'o')]
    pub output: Option<PathBuf>,
}

impl Args {
    /// # Errors
    ///
    /// If any part of the lifecycle fails
    /// * Fails to download or decode the catalog
    /// * Fails to generate any icon
    /// * Fails to write the output
    pub fn run(&self) -> anyhow::Result<()> {
        let catalog = fetch_catalog(CATALOG_URL)?;
        let source = generate(&catalog, &Options::default()).context("failed to generate icons")?;
        self.write_output(&source)
    }

    fn write_output(&self, source: &[u8]) -> anyhow::Result<()> {
        let Some(path) = &self.output else {
            let mut stdout = io::stdout().lock();
            stdout.write_all(source)?;
            stdout.flush()?;
            return Ok(());
        };

        fs::write(path, source).with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}
