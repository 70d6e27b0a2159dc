//! CLI command implementations.

use anyhow::{Context, Result};
use cloudbuild_generator::{Freshness, Generator};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

/// Path overrides given on the command line.
#[derive(Debug, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

pub fn load_generator(config_path: Option<&Path>, overrides: Overrides) -> Result<Generator> {
    let mut generator = Generator::load(config_path).context("Failed to load generator config")?;

    if let Some(root) = overrides.root {
        generator.config_mut().root = root;
    }
    if let Some(output) = overrides.output {
        generator.config_mut().output = output;
    }

    Ok(generator)
}

/// Render and overwrite the output file.
pub fn generate(generator: &Generator) -> Result<()> {
    let document = generator
        .render()
        .context("Failed to render cloudbuild config")?;
    generator.write(&document)?;
    info!(path = %generator.output_path().display(), "Wrote cloudbuild config");
    Ok(())
}

/// Render, compare against the output file and print the status line.
pub fn verify(generator: &Generator) -> Result<Freshness> {
    let document = generator
        .render()
        .context("Failed to render cloudbuild config")?;
    let freshness = generator.verify(&document)?;
    println!("{}", status_line(generator.output_path(), freshness));
    Ok(freshness)
}

/// Process exit status for a verify result: 0 when up to date, 1 otherwise.
pub fn exit_status(freshness: Freshness) -> u8 {
    if freshness.is_up_to_date() { 0 } else { 1 }
}

pub fn exit_code(freshness: Freshness) -> ExitCode {
    ExitCode::from(exit_status(freshness))
}

fn status_line(path: &Path, freshness: Freshness) -> String {
    match freshness {
        Freshness::UpToDate => format!("The {} file is up-to-date", path.display()),
        Freshness::OutOfDate | Freshness::Missing => format!(
            "The {} file is not up-to-date. Please re-generate it",
            path.display()
        ),
    }
}
