//! Depth-bounded graph expansion with cycle detection

use std::collections::HashSet;

use crate::cli::ExpansionMode;
use crate::graph::model::DependencyGraph;
use crate::progress::ProgressReporter;
use crate::source::DependencySource;

/// A dependency source failure tolerated during expansion
///
/// The failing branch stops growing; siblings and ancestors are unaffected.
#[derive(Debug, Clone)]
pub struct ExpansionFailure {
    pub package: String,
    pub reason: String,
}

/// Everything one top-level expansion produced
///
/// Each call to [`GraphBuilder::build`] returns a fresh result; no state is
/// shared between analysis runs.
#[derive(Debug, Default)]
pub struct GraphBuildResult {
    pub graph: DependencyGraph,
    /// Cyclic paths observed during expansion, each ending with the package
    /// that closed the cycle
    pub cycles: Vec<Vec<String>>,
    pub failures: Vec<ExpansionFailure>,
}

impl GraphBuildResult {
    pub fn cycle_detected(&self) -> bool {
        !self.cycles.is_empty()
    }
}

/// Builder for constructing dependency graphs
///
/// Expands a start package into a directed graph of observed dependency
/// edges via depth-limited depth-first traversal. Cycle detection is
/// path-based: only re-appearance of a package on the *current* expansion
/// path counts as a cycle, so a package legitimately shared between
/// independent branches is not misreported.
pub struct GraphBuilder<'a> {
    source: &'a dyn DependencySource,
    max_depth: usize,
    mode: ExpansionMode,
}

impl<'a> GraphBuilder<'a> {
    /// Create a new graph builder
    ///
    /// # Arguments
    /// * `source` - Where direct dependencies come from; the builder never
    ///   knows which implementation it holds
    /// * `max_depth` - Expansion stops after this many edges from the root
    /// * `mode` - Whether repeated packages are re-expanded per occurrence
    pub fn new(source: &'a dyn DependencySource, max_depth: usize, mode: ExpansionMode) -> Self {
        Self {
            source,
            max_depth,
            mode,
        }
    }

    /// Expand `start` into a fresh [`GraphBuildResult`]
    pub fn build(&self, start: &str, progress: Option<&ProgressReporter>) -> GraphBuildResult {
        let mut result = GraphBuildResult::default();
        result.graph.ensure_node(start);

        let mut path = Vec::new();
        let mut expanded = HashSet::new();
        self.expand(start, 0, &mut path, &mut expanded, progress, &mut result);

        result
    }

    fn expand(
        &self,
        package: &str,
        depth: usize,
        path: &mut Vec<String>,
        expanded: &mut HashSet<String>,
        progress: Option<&ProgressReporter>,
        out: &mut GraphBuildResult,
    ) {
        if depth >= self.max_depth {
            return;
        }

        // Dag mode expands each package name at most once; the edge to this
        // package was already recorded by the caller.
        if self.mode == ExpansionMode::Dag && !expanded.insert(package.to_string()) {
            return;
        }

        if let Some(p) = progress {
            p.expanding_package(package);
        }

        let dependencies = match self.source.direct_dependencies(package) {
            Ok(dependencies) => dependencies,
            Err(err) => {
                out.failures.push(ExpansionFailure {
                    package: package.to_string(),
                    reason: err.to_string(),
                });
                return;
            }
        };

        path.push(package.to_string());

        for dependency in dependencies {
            // A dependency already on the current path closes a cycle: report
            // the full cyclic path and do not record the closing edge.
            if path.iter().any(|ancestor| *ancestor == dependency.name) {
                let mut cycle = path.clone();
                cycle.push(dependency.name.clone());
                out.cycles.push(cycle);
                continue;
            }

            out.graph
                .record_edge(package, &dependency.name, &dependency.constraint);
            self.expand(&dependency.name, depth + 1, path, expanded, progress, out);
        }

        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::CarouselError;
    use crate::source::DirectDependency;

    struct MapSource {
        packages: HashMap<String, Vec<&'static str>>,
    }

    impl MapSource {
        fn new(entries: &[(&str, &[&'static str])]) -> Self {
            let packages = entries
                .iter()
                .map(|(name, deps)| (name.to_string(), deps.to_vec()))
                .collect();
            Self { packages }
        }
    }

    impl DependencySource for MapSource {
        fn direct_dependencies(
            &self,
            package: &str,
        ) -> Result<Vec<DirectDependency>, CarouselError> {
            Ok(self
                .packages
                .get(package)
                .map(|deps| {
                    deps.iter()
                        .map(|name| DirectDependency {
                            name: name.to_string(),
                            constraint: "*".to_string(),
                        })
                        .collect()
                })
                .unwrap_or_default())
        }
    }

    #[test]
    fn test_depth_bound_stops_expansion() {
        let source = MapSource::new(&[("a", &["b"]), ("b", &["c"]), ("c", &["d"])]);

        let result = GraphBuilder::new(&source, 1, ExpansionMode::Tree).build("a", None);

        let edges: Vec<(String, String)> = result
            .graph
            .edge_list()
            .into_iter()
            .map(|(from, to, _)| (from, to))
            .collect();
        assert_eq!(edges, vec![("a".to_string(), "b".to_string())]);
    }

    #[test]
    fn test_cycle_reported_without_closing_edge() {
        let source = MapSource::new(&[("a", &["b"]), ("b", &["a"])]);

        let result = GraphBuilder::new(&source, 5, ExpansionMode::Tree).build("a", None);

        assert!(result.cycle_detected());
        assert_eq!(result.cycles, vec![vec!["a", "b", "a"]]);

        let edges: Vec<(String, String)> = result
            .graph
            .edge_list()
            .into_iter()
            .map(|(from, to, _)| (from, to))
            .collect();
        assert_eq!(edges, vec![("a".to_string(), "b".to_string())]);
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let source = MapSource::new(&[("a", &["a"])]);

        let result = GraphBuilder::new(&source, 5, ExpansionMode::Tree).build("a", None);

        assert_eq!(result.cycles, vec![vec!["a", "a"]]);
        assert_eq!(result.graph.edge_count(), 0);
    }

    #[test]
    fn test_failure_stops_one_branch_only() {
        struct FailingSource(MapSource);

        impl DependencySource for FailingSource {
            fn direct_dependencies(
                &self,
                package: &str,
            ) -> Result<Vec<DirectDependency>, CarouselError> {
                if package == "broken" {
                    return Err(CarouselError::PackageNotFound {
                        package: package.to_string(),
                    });
                }
                self.0.direct_dependencies(package)
            }
        }

        let source = FailingSource(MapSource::new(&[("a", &["broken", "c"]), ("c", &["d"])]));

        let result = GraphBuilder::new(&source, 5, ExpansionMode::Tree).build("a", None);

        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].package, "broken");

        let edges: Vec<(String, String)> = result
            .graph
            .edge_list()
            .into_iter()
            .map(|(from, to, _)| (from, to))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("a".to_string(), "broken".to_string()),
                ("a".to_string(), "c".to_string()),
                ("c".to_string(), "d".to_string()),
            ]
        );
    }
}
