//! # Dependency Sources
//!
//! A dependency source answers one question: given a package name, what are
//! its direct dependencies? Two interchangeable implementations exist — one
//! backed by a live npm-compatible registry, one by a static fixture file —
//! selected once at startup and injected into the graph builder, which never
//! knows which implementation it holds.

mod fixture;
mod registry;

pub use fixture::FixtureSource;
pub use registry::RegistrySource;

use crate::config::SourceSelection;
use crate::error::CarouselError;

/// One directly-observed dependency of a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectDependency {
    pub name: String,
    /// Opaque version-constraint string, used only for display
    pub constraint: String,
}

/// Where direct dependency data comes from
pub trait DependencySource {
    /// Direct dependencies of `package`, in the order the backing store
    /// reports them
    ///
    /// Fails with a descriptive error when the package is unknown, the
    /// backing store is unreachable, or its content is malformed. Callers
    /// expanding a graph recover from these failures per node.
    fn direct_dependencies(&self, package: &str) -> Result<Vec<DirectDependency>, CarouselError>;
}

/// Construct the dependency source selected by the configuration
pub fn create_source(
    selection: &SourceSelection,
) -> Result<Box<dyn DependencySource>, CarouselError> {
    match selection {
        SourceSelection::Registry { url } => Ok(Box::new(RegistrySource::new(url)?)),
        SourceSelection::Fixture { path } => Ok(Box::new(FixtureSource::load(path)?)),
    }
}
