//! Fixture-backed dependency source

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{DependencySource, DirectDependency};
use crate::error::CarouselError;
use crate::graph::WILDCARD_CONSTRAINT;

/// Dependency source backed by a static fixture file
///
/// The fixture is a JSON object mapping each package name to an array of
/// dependency names, e.g. `{"A": ["B", "C"], "B": [], "C": ["B"]}`. Listed
/// dependencies are treated as unconstrained. A package absent from the
/// fixture is a leaf, not an error.
#[derive(Debug)]
pub struct FixtureSource {
    path: PathBuf,
    packages: HashMap<String, Vec<String>>,
}

impl FixtureSource {
    /// Load and parse a fixture file once, up front
    pub fn load(path: &Path) -> Result<Self, CarouselError> {
        let content = fs::read_to_string(path).map_err(|source| CarouselError::FileReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let packages =
            serde_json::from_str(&content).map_err(|source| CarouselError::FixtureParseError {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            packages,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DependencySource for FixtureSource {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<DirectDependency>, CarouselError> {
        Ok(self
            .packages
            .get(package)
            .map(|dependencies| {
                dependencies
                    .iter()
                    .map(|name| DirectDependency {
                        name: name.clone(),
                        constraint: WILDCARD_CONSTRAINT.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}
