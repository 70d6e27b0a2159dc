//! Solution discovery.

use cloudbuild_core::{SkipList, Solution};
use std::path::Path;
use tracing::info;

use crate::{GeneratorError, GeneratorResult};

/// List the solutions under `root`.
///
/// Every immediate subdirectory is a solution. Plain files are ignored,
/// symlinks to directories are followed. The result is sorted by name with
/// skip-listed names removed.
pub fn discover_solutions(root: &Path, skip_list: &SkipList) -> GeneratorResult<Vec<Solution>> {
    let entries = std::fs::read_dir(root).map_err(|source| GeneratorError::Discovery {
        path: root.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| GeneratorError::Discovery {
            path: root.to_path_buf(),
            source,
        })?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().into_string().map_err(|raw| {
            cloudbuild_core::Error::InvalidSolutionName(raw.to_string_lossy().into_owned())
        })?;
        names.push(name);
    }
    names.sort();

    let mut solutions = Vec::with_capacity(names.len());
    for name in names {
        if skip_list.contains(&name) {
            info!(solution = %name, "Skipping solution");
        } else {
            info!(solution = %name, "Adding config for solution");
            solutions.push(Solution::new(name)?);
        }
    }

    Ok(solutions)
}
