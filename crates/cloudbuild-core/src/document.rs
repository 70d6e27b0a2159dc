//! The rendered pipeline document.

use derive_more::Display;

/// Fully substituted template text.
///
/// The text never ends in whitespace other than a single `\n`, so two
/// renders of the same inputs are byte-identical regardless of how the
/// template file itself ends.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct RenderedDocument(String);

impl RenderedDocument {
    pub fn new(rendered: impl Into<String>) -> Self {
        let mut text = rendered.into();
        text.truncate(text.trim_end().len());
        text.push('\n');
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Exact byte comparison, no normalization.
    pub fn matches(&self, existing: &[u8]) -> bool {
        self.0.as_bytes() == existing
    }
}
