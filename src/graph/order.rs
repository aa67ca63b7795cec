//! Topological load-order resolution

use std::collections::VecDeque;

use crate::graph::model::DependencyGraph;

/// Result of one load-order computation
///
/// Derived on demand from a [`DependencyGraph`]; stale once the graph is
/// rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOrderResult {
    /// Topological ordering: for every recorded edge u -> v, u appears
    /// before v
    pub order: Vec<String>,
    /// Packages with nonzero in-degree after the queue drained; non-empty
    /// exactly when the graph contains a residual cycle
    pub residual: Vec<String>,
}

impl LoadOrderResult {
    pub fn is_complete(&self) -> bool {
        self.residual.is_empty()
    }
}

/// Compute a deterministic topological ordering via in-degree counting
///
/// Kahn's algorithm with a FIFO queue: ties among simultaneously-zero
/// in-degree nodes resolve in the order nodes first reached zero, which
/// follows the recorded edge order. The result is deterministic for a fixed
/// graph but not alphabetically stable. Isolated nodes seed the queue
/// immediately; the start package is ordered like any other node.
pub fn load_order(graph: &DependencyGraph) -> LoadOrderResult {
    let mut in_degree = vec![0usize; graph.node_count()];
    for idx in graph.node_indices() {
        for (target, _) in graph.ordered_edges(idx) {
            in_degree[target.index()] += 1;
        }
    }

    let mut queue: VecDeque<_> = graph
        .node_indices()
        .filter(|idx| in_degree[idx.index()] == 0)
        .collect();

    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(current) = queue.pop_front() {
        order.push(graph.package_name(current).to_string());

        for (target, _) in graph.ordered_edges(current) {
            in_degree[target.index()] -= 1;
            if in_degree[target.index()] == 0 {
                queue.push_back(target);
            }
        }
    }

    let residual = graph
        .node_indices()
        .filter(|idx| in_degree[idx.index()] > 0)
        .map(|idx| graph.package_name(idx).to_string())
        .collect();

    LoadOrderResult { order, residual }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_diamond_order() {
        // a -> b, a -> c, c -> b: b waits for both parents
        let mut graph = DependencyGraph::new();
        graph.record_edge("a", "b", "*");
        graph.record_edge("a", "c", "*");
        graph.record_edge("c", "b", "*");

        let result = load_order(&graph);
        assert_eq!(result.order, vec!["a", "c", "b"]);
        assert!(result.is_complete());
    }

    #[test]
    fn test_parallel_edges_count_toward_in_degree() {
        let mut graph = DependencyGraph::new();
        graph.record_edge("a", "b", "*");
        graph.record_edge("a", "b", "*");

        let result = load_order(&graph);
        assert_eq!(result.order, vec!["a", "b"]);
        assert!(result.is_complete());
    }

    #[test]
    fn test_isolated_node_seeds_immediately() {
        let mut graph = DependencyGraph::new();
        graph.ensure_node("lonely");
        graph.record_edge("a", "b", "*");

        let result = load_order(&graph);
        assert_eq!(result.order, vec!["lonely", "a", "b"]);
    }

    #[test]
    fn test_residual_cycle_is_reported() {
        let mut graph = DependencyGraph::new();
        graph.record_edge("a", "b", "*");
        graph.record_edge("b", "a", "*");

        let result = load_order(&graph);
        assert!(!result.is_complete());
        assert_eq!(result.order, Vec::<String>::new());
        assert_eq!(result.residual, vec!["a", "b"]);
    }

    #[test]
    fn test_nodes_behind_a_cycle_stay_residual() {
        let mut graph = DependencyGraph::new();
        graph.record_edge("a", "b", "*");
        graph.record_edge("b", "a", "*");
        graph.record_edge("a", "leaf", "*");

        let result = load_order(&graph);
        // The leaf is only reachable through the cycle, so it never drains
        assert_eq!(result.residual, vec!["a", "b", "leaf"]);
        assert!(result.order.is_empty());
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let mut graph = DependencyGraph::new();
        graph.record_edge("a", "b", "*");
        graph.record_edge("a", "c", "*");
        graph.record_edge("b", "d", "*");
        graph.record_edge("c", "d", "*");

        let first = load_order(&graph);
        let second = load_order(&graph);
        assert_eq!(first, second);
    }
}
