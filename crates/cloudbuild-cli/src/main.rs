//! Cloud Build config generator CLI.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "cloudbuild-generator")]
#[command(about = "Generate cloudbuild.yaml from the solutions directory", long_about = None)]
struct Cli {
    /// Verify the generated file is up to date instead of writing it
    #[arg(long = "verify_only", visible_alias = "verify-only")]
    verify_only: bool,

    /// Generator configuration (KDL), replacing the embedded defaults
    #[arg(long, env = "CLOUDBUILD_GENERATOR_CONFIG")]
    config: Option<PathBuf>,

    /// Directory whose subdirectories are the solutions
    #[arg(long)]
    root: Option<PathBuf>,

    /// Path of the generated file
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> commands::Overrides {
        commands::Overrides {
            root: self.root.clone(),
            output: self.output.clone(),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let generator = commands::load_generator(cli.config.as_deref(), cli.overrides())?;

    if cli.verify_only {
        let freshness = commands::verify(&generator)?;
        Ok(commands::exit_code(freshness))
    } else {
        commands::generate(&generator)?;
        Ok(ExitCode::SUCCESS)
    }
}
