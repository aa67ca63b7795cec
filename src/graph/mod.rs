//! # Graph Construction, Ordering, and Rendering
//!
//! This module is the core of the tool: it expands a start package into a
//! directed dependency graph, derives a topological load order from it, and
//! renders it as text.
//!
//! ## Components
//!
//! ### Graph Building
//! - **DependencyGraph**: Name-keyed directed graph with insertion-ordered
//!   edges and parallel edges allowed
//! - **GraphBuilder**: Depth-bounded depth-first expansion with path-based
//!   cycle detection, in tree (per-occurrence) or dag (memoized) mode
//! - **GraphBuildResult**: Graph plus observed cycles and tolerated source
//!   failures, returned fresh from every build
//!
//! ### Ordering
//! - **load_order**: Kahn's algorithm with a FIFO queue; reports residual
//!   nodes when the graph cannot be fully ordered
//!
//! ### Rendering
//! - **GraphRenderer**: ASCII tree and Graphviz DOT views of the stored
//!   graph
//!
//! ## Example
//!
//! ```
//! use dep_carousel::graph::{DependencyGraph, GraphRenderer, load_order};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = DependencyGraph::new();
//! graph.record_edge("app", "left-pad", "^1.3.0");
//! graph.record_edge("app", "chalk", "*");
//!
//! let order = load_order(&graph);
//! assert_eq!(order.order, vec!["app", "left-pad", "chalk"]);
//!
//! let renderer = GraphRenderer::new();
//! let mut dot = Vec::new();
//! renderer.render_dot(&graph, "app", 3, false, &mut dot)?;
//!
//! let dot_output = String::from_utf8(dot)?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains("left-pad"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod model;
mod order;
mod renderer;

// Re-export main types
pub use builder::{ExpansionFailure, GraphBuildResult, GraphBuilder};
pub use model::{DependencyEdge, DependencyGraph, PackageNode, WILDCARD_CONSTRAINT};
pub use order::{LoadOrderResult, load_order};
pub use renderer::GraphRenderer;
