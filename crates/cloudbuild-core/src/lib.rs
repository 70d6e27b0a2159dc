//! Core domain types for the Cloud Build config generator.
//!
//! This crate contains:
//! - Solutions discovered from the solutions root
//! - The skip-list and per-solution extra verification variants
//! - The rendered document compared against `cloudbuild.yaml`

pub mod document;
pub mod error;
pub mod solution;
pub mod variant;

pub use document::RenderedDocument;
pub use error::{Error, Result};
pub use solution::{SkipList, Solution};
pub use variant::{ExtraConfig, ExtraConfigs};
