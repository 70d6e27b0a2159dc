//! Cloud Build config generation.
//!
//! This crate handles:
//! - Discovering solutions under the solutions root
//! - Rendering `cloudbuild.yaml` from the embedded template
//! - Writing the result or verifying an existing file against it

pub mod discovery;
pub mod error;
pub mod output;
pub mod render;

pub use error::{GeneratorError, GeneratorResult};
pub use output::Freshness;

use cloudbuild_config::GeneratorConfig;
use cloudbuild_core::{RenderedDocument, Solution};
use std::path::Path;
use tracing::debug;

/// Ties configuration, discovery, rendering and output together.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Build a generator from a config file, or the embedded defaults.
    pub fn load(config_path: Option<&Path>) -> GeneratorResult<Self> {
        let config = match config_path {
            Some(path) => {
                debug!(path = %path.display(), "Loading generator config");
                GeneratorConfig::from_file(path)?
            }
            None => {
                debug!("Using embedded generator config");
                GeneratorConfig::embedded()?
            }
        };
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GeneratorConfig {
        &mut self.config
    }

    pub fn output_path(&self) -> &Path {
        &self.config.output
    }

    /// Solutions to generate steps for, in order.
    pub fn discover(&self) -> GeneratorResult<Vec<Solution>> {
        discovery::discover_solutions(&self.config.root, &self.config.skip_list)
    }

    /// Discover solutions and render the full document in memory.
    pub fn render(&self) -> GeneratorResult<RenderedDocument> {
        let solutions = self.discover()?;

        for name in self.config.extra_configs.solutions() {
            if !solutions.iter().any(|s| s.name() == name) {
                debug!(solution = %name, "Extra configs given for a solution that is not generated");
            }
        }

        render::render_cloudbuild(&solutions, &self.config.extra_configs)
    }

    /// Overwrite the output file.
    pub fn write(&self, document: &RenderedDocument) -> GeneratorResult<()> {
        output::write_document(&self.config.output, document)
    }

    /// Compare the output file against the document without touching it.
    pub fn verify(&self, document: &RenderedDocument) -> GeneratorResult<Freshness> {
        output::check_document(&self.config.output, document)
    }
}
