//! ASCII tree and Graphviz DOT rendering

use std::io::Write;

use miette::Result;
use petgraph::graph::NodeIndex;

use crate::error::CarouselError;
use crate::graph::model::{DependencyGraph, WILDCARD_CONSTRAINT};

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const START_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const START_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_NOTE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(CarouselError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(CarouselError::from)
    };
}

/// Renders a built dependency graph as plain text
///
/// Both renderers consume the stored graph only: a node whose dependencies
/// were pruned by the depth or cycle bounds is indistinguishable from a true
/// leaf, because the pruned edges were never recorded.
#[derive(Default)]
pub struct GraphRenderer;

impl GraphRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the indented ASCII tree rooted at `start`
    ///
    /// Depth-first, preserving each node's recorded edge order. Wildcard
    /// constraints are omitted from labels; anything else is appended in
    /// parentheses.
    pub fn render_tree(
        &self,
        graph: &DependencyGraph,
        start: &str,
        output: &mut dyn Write,
    ) -> Result<()> {
        let Some(root) = graph.node_index(start) else {
            return Err(CarouselError::GraphError {
                message: format!("start package '{start}' is not present in the graph"),
            }
            .into());
        };

        self.render_tree_node(graph, root, "", true, None, output)
    }

    fn render_tree_node(
        &self,
        graph: &DependencyGraph,
        node: NodeIndex,
        prefix: &str,
        is_last: bool,
        constraint: Option<&str>,
        output: &mut dyn Write,
    ) -> Result<()> {
        let connector = if is_last { "└── " } else { "├── " };
        let label = match constraint {
            Some(c) if c != WILDCARD_CONSTRAINT => format!(" ({c})"),
            _ => String::new(),
        };
        writeln_out!(
            output,
            "{prefix}{connector}{}{label}",
            graph.package_name(node)
        )?;

        let children = graph.ordered_edges(node);
        if children.is_empty() {
            return Ok(());
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        for (i, (child, edge)) in children.iter().enumerate() {
            self.render_tree_node(
                graph,
                *child,
                &child_prefix,
                i == children.len() - 1,
                Some(&edge.constraint),
                output,
            )?;
        }

        Ok(())
    }

    /// Render a self-contained Graphviz DOT description of the graph
    ///
    /// One declaration per distinct package (first-seen order) and one per
    /// recorded edge, with the version constraint as the edge label. The
    /// start node gets a distinct fill; when `cycle_detected` is set a
    /// trailing note marks the graph, without re-deriving the cyclic edges
    /// (they were never recorded). No layout is computed here.
    pub fn render_dot(
        &self,
        graph: &DependencyGraph,
        start: &str,
        max_depth: usize,
        cycle_detected: bool,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph dependency_graph {{")?;
        writeln_out!(output, "    rankdir=TB;")?;
        writeln_out!(
            output,
            "    node [shape=box, style=filled, fillcolor=\"{}\", color=\"{}\"];",
            colors::NORMAL_NODE_FILL,
            colors::NORMAL_NODE_STROKE
        )?;
        writeln_out!(output, "    edge [color=\"{}\"];", colors::EDGE)?;
        writeln_out!(output)?;
        writeln_out!(output, "    // dependency graph for {}", dot_id(start))?;
        writeln_out!(output, "    // expansion depth: {max_depth}")?;
        writeln_out!(output, "    // packages: {}", graph.node_count())?;
        writeln_out!(output)?;

        for idx in graph.node_indices() {
            let name = graph.package_name(idx);
            if name == start {
                writeln_out!(
                    output,
                    "    {} [fillcolor=\"{}\", color=\"{}\", style=\"filled,bold\"];",
                    dot_id(name),
                    colors::START_NODE_FILL,
                    colors::START_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "    {};", dot_id(name))?;
            }
        }

        writeln_out!(output)?;
        for idx in graph.node_indices() {
            for (target, edge) in graph.ordered_edges(idx) {
                writeln_out!(
                    output,
                    "    {} -> {} [label={}];",
                    dot_id(graph.package_name(idx)),
                    dot_id(graph.package_name(target)),
                    dot_id(&edge.constraint)
                )?;
            }
        }

        if cycle_detected {
            writeln_out!(output)?;
            writeln_out!(output, "    // cyclic dependencies detected during expansion")?;
            writeln_out!(output, "    label=\"⚠ cyclic dependencies detected\";")?;
            writeln_out!(output, "    labelloc=b;")?;
            writeln_out!(output, "    fontcolor=\"{}\";", colors::CYCLE_NOTE)?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }
}

// Quote a name for DOT, escaping embedded backslashes and quotes
fn dot_id(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_id_quotes_and_escapes() {
        assert_eq!(dot_id("left-pad"), "\"left-pad\"");
        assert_eq!(dot_id("@scope/pkg"), "\"@scope/pkg\"");
        assert_eq!(dot_id("we\"ird"), "\"we\\\"ird\"");
    }

    #[test]
    fn test_tree_requires_known_start() {
        let graph = DependencyGraph::new();
        let renderer = GraphRenderer::new();
        let mut out = Vec::new();

        let result = renderer.render_tree(&graph, "ghost", &mut out);
        assert!(result.is_err());
    }
}
