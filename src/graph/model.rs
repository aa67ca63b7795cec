//! Core graph types
//!
//! This module contains the fundamental data structures used in the
//! dependency graph.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// Version constraint carried by dependencies a fixture repository lists
/// without one, and suppressed from tree labels as uninformative.
pub const WILDCARD_CONSTRAINT: &str = "*";

/// A package observed during expansion; the name is its identity key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    pub name: String,
}

/// A directly-observed dependency relationship
///
/// The constraint string is opaque metadata used only for display; it is
/// never interpreted or satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    pub constraint: String,
}

impl DependencyEdge {
    pub fn is_wildcard(&self) -> bool {
        self.constraint == WILDCARD_CONSTRAINT
    }
}

/// Directed dependency graph keyed by package name
///
/// Nodes are created on first reference and deduplicated by name; edges are
/// kept in the order they were recorded, and parallel edges are allowed. A
/// package reached through several expansion paths accumulates one copy of
/// its edge list per expansion, which is exactly what the non-deduplicated
/// tree expansion mode stores.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    graph: DiGraph<PackageNode, DependencyEdge>,
    indices: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `name`, inserting a fresh node on first reference
    pub fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.indices.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(PackageNode {
            name: name.to_string(),
        });
        self.indices.insert(name.to_string(), idx);
        idx
    }

    pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.indices.get(name).copied()
    }

    /// Append the edge `from -> to` with its version constraint, creating
    /// either endpoint as needed
    pub fn record_edge(&mut self, from: &str, to: &str, constraint: &str) {
        let from_idx = self.ensure_node(from);
        let to_idx = self.ensure_node(to);
        self.graph.add_edge(
            from_idx,
            to_idx,
            DependencyEdge {
                constraint: constraint.to_string(),
            },
        );
    }

    pub fn package_name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].name
    }

    /// All node indices in first-seen order
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// All package names in first-seen order
    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(|idx| self.package_name(idx))
    }

    /// Outgoing edges of `idx` in the order they were recorded
    ///
    /// petgraph iterates a node's adjacency newest-first, so the collected
    /// list is reversed to restore insertion order.
    pub fn ordered_edges(&self, idx: NodeIndex) -> Vec<(NodeIndex, &DependencyEdge)> {
        let mut edges: Vec<_> = self
            .graph
            .edges(idx)
            .map(|edge| (edge.target(), edge.weight()))
            .collect();
        edges.reverse();
        edges
    }

    /// Every recorded edge as (from, to, constraint), grouped by source node
    /// in first-seen order
    pub fn edge_list(&self) -> Vec<(String, String, String)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for idx in self.graph.node_indices() {
            for (target, edge) in self.ordered_edges(idx) {
                edges.push((
                    self.package_name(idx).to_string(),
                    self.package_name(target).to_string(),
                    edge.constraint.clone(),
                ));
            }
        }
        edges
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_node_deduplicates_by_name() {
        let mut graph = DependencyGraph::new();
        let a = graph.ensure_node("a");
        let b = graph.ensure_node("b");
        let a_again = graph.ensure_node("a");

        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_ordered_edges_preserve_insertion_order() {
        let mut graph = DependencyGraph::new();
        graph.record_edge("app", "zlib", "^1.0.0");
        graph.record_edge("app", "alpha", "~2.0.0");
        graph.record_edge("app", "middle", "*");

        let app = graph.node_index("app").unwrap();
        let targets: Vec<&str> = graph
            .ordered_edges(app)
            .iter()
            .map(|(idx, _)| graph.package_name(*idx))
            .collect();

        assert_eq!(targets, vec!["zlib", "alpha", "middle"]);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph = DependencyGraph::new();
        graph.record_edge("a", "b", "*");
        graph.record_edge("a", "b", "*");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);

        let a = graph.node_index("a").unwrap();
        assert_eq!(graph.ordered_edges(a).len(), 2);
    }

    #[test]
    fn test_package_names_in_first_seen_order() {
        let mut graph = DependencyGraph::new();
        graph.record_edge("root", "leaf", "*");
        graph.record_edge("other", "leaf", "*");

        let names: Vec<&str> = graph.package_names().collect();
        assert_eq!(names, vec!["root", "leaf", "other"]);
    }

    #[test]
    fn test_wildcard_detection() {
        let edge = DependencyEdge {
            constraint: "*".to_string(),
        };
        assert!(edge.is_wildcard());

        let pinned = DependencyEdge {
            constraint: "^1.2.3".to_string(),
        };
        assert!(!pinned.is_wildcard());
    }
}
