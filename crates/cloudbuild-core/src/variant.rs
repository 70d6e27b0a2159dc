//! Extra verification variants.
//!
//! A solution can be verified more than once: the default pass plus one pass
//! per [`ExtraConfig`], each run with additional environment variables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Error, Result};

/// A named verification variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraConfig {
    /// Display name, rendered as `Verify <solution> (<name>)`.
    pub name: String,
    /// `KEY=VALUE` assignments, emitted verbatim.
    pub env_vars: Vec<String>,
}

impl ExtraConfig {
    pub fn new(name: impl Into<String>, env_vars: Vec<String>) -> Self {
        Self {
            name: name.into(),
            env_vars,
        }
    }
}

/// Extra configs keyed by solution name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraConfigs(BTreeMap<String, Vec<ExtraConfig>>);

impl ExtraConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the variants of one solution.
    ///
    /// Step ids must be unique, so a solution may be registered once and
    /// its variant names may not repeat.
    pub fn insert(&mut self, solution: impl Into<String>, configs: Vec<ExtraConfig>) -> Result<()> {
        let solution = solution.into();
        if self.0.contains_key(&solution) {
            return Err(Error::Duplicate(format!("extra configs for '{}'", solution)));
        }
        for (i, config) in configs.iter().enumerate() {
            if configs[..i].iter().any(|c| c.name == config.name) {
                return Err(Error::Duplicate(format!(
                    "variant '{}' of '{}'",
                    config.name, solution
                )));
            }
        }
        self.0.insert(solution, configs);
        Ok(())
    }

    /// Variants for a solution; empty when the solution has none.
    pub fn for_solution(&self, solution: impl AsRef<str>) -> &[ExtraConfig] {
        self.0
            .get(solution.as_ref())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Solution names that have variants, in ascending order.
    pub fn solutions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
