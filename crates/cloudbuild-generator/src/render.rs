//! Rendering `cloudbuild.yaml` from the askama template.

use askama::Template;
use cloudbuild_core::{ExtraConfigs, RenderedDocument, Solution};
use tracing::debug;

use crate::GeneratorResult;

#[derive(Template)]
#[template(path = "cloudbuild.yaml", escape = "none")]
struct CloudbuildTemplate<'a> {
    solutions: &'a [Solution],
    extra_configs: &'a ExtraConfigs,
}

/// Render the pipeline: the fixed preamble, one build step per solution,
/// then one verify step per solution followed by its variant steps.
pub fn render_cloudbuild(
    solutions: &[Solution],
    extra_configs: &ExtraConfigs,
) -> GeneratorResult<RenderedDocument> {
    let template = CloudbuildTemplate {
        solutions,
        extra_configs,
    };
    let document = RenderedDocument::new(template.render()?);
    debug!(
        solutions = solutions.len(),
        bytes = document.as_bytes().len(),
        "Rendered cloudbuild template"
    );
    Ok(document)
}
