//! Command implementations for the dep-carousel CLI
//!
//! This module contains the implementations for each CLI command:
//! - tree: Print the dependency tree of one or more packages
//! - graph: Generate a Graphviz DOT description of the dependency graph
//! - order: Compute the load order of a package's dependencies
//! - compare: Compare our tree rendering against npm's own output

pub mod compare;
pub mod graph;
pub mod order;
pub mod tree;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Tree { .. } => tree::execute_tree_command(command),
        Commands::Graph { .. } => graph::execute_graph_command(command),
        Commands::Order { .. } => order::execute_order_command(command),
        Commands::Compare { .. } => compare::execute_compare_command(command),
    }
}
