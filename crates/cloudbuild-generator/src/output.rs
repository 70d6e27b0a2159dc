//! Writing and verifying the generated file.

use cloudbuild_core::RenderedDocument;
use std::path::Path;
use tracing::debug;

use crate::{GeneratorError, GeneratorResult};

/// State of the on-disk file relative to a fresh render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Contents are byte-identical.
    UpToDate,
    /// The file exists but differs.
    OutOfDate,
    /// There is no regular file at the output path.
    Missing,
}

impl Freshness {
    pub fn is_up_to_date(self) -> bool {
        matches!(self, Freshness::UpToDate)
    }
}

/// Overwrite `path` with the document.
pub fn write_document(path: &Path, document: &RenderedDocument) -> GeneratorResult<()> {
    debug!(path = %path.display(), bytes = document.as_bytes().len(), "Writing document");
    std::fs::write(path, document.as_bytes()).map_err(|source| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Compare the file at `path` with the document. Never writes.
pub fn check_document(path: &Path, document: &RenderedDocument) -> GeneratorResult<Freshness> {
    if !path.is_file() {
        debug!(path = %path.display(), "No existing document");
        return Ok(Freshness::Missing);
    }

    let existing = std::fs::read(path).map_err(|source| GeneratorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if document.matches(&existing) {
        Ok(Freshness::UpToDate)
    } else {
        Ok(Freshness::OutOfDate)
    }
}
