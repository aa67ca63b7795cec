//! # Carousel - Explore npm Package Dependency Graphs
//!
//! dep-carousel resolves the transitive dependency graph of a named npm
//! package and turns it into something you can actually look at: an indented
//! ASCII tree, a Graphviz DOT description, or a deterministic load order.
//! Dependency data comes either from a live npm-compatible registry or from a
//! fixture file, so the whole pipeline works offline.
//!
//! ## Main Components
//!
//! - **Source**: Pluggable dependency sources (registry-backed and
//!   fixture-backed) behind the [`source::DependencySource`] trait
//! - **Graph**: Builds the depth-bounded dependency graph, detecting cyclic
//!   paths along the way
//! - **Order**: Computes a Kahn topological load order over the built graph
//! - **Renderers**: ASCII tree and Graphviz DOT views of the same graph
//!
//! ## Usage
//!
//! ### Example: Analyzing a Fixture Repository
//!
//! ```no_run
//! use dep_carousel::cli::ExpansionMode;
//! use dep_carousel::graph::{GraphBuilder, GraphRenderer, load_order};
//! use dep_carousel::source::FixtureSource;
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Load the dependency source
//! let source = FixtureSource::load("test_data.json".as_ref())?;
//!
//! // Step 2: Expand the start package into a graph
//! let builder = GraphBuilder::new(&source, 3, ExpansionMode::Tree);
//! let result = builder.build("A", None);
//!
//! if result.cycle_detected() {
//!     for cycle in &result.cycles {
//!         println!("cycle: {}", cycle.join(" -> "));
//!     }
//! }
//!
//! // Step 3: Derive the load order
//! let order = load_order(&result.graph);
//! println!("load order: {}", order.order.join(", "));
//!
//! // Step 4: Render
//! let renderer = GraphRenderer::new();
//! let mut tree = Vec::new();
//! renderer.render_tree(&result.graph, "A", &mut tree)?;
//! print!("{}", String::from_utf8_lossy(&tree));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Writing a DOT Description
//!
//! ```no_run
//! use dep_carousel::cli::ExpansionMode;
//! use dep_carousel::graph::{GraphBuilder, GraphRenderer};
//! use dep_carousel::source::FixtureSource;
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let source = FixtureSource::load("test_data.json".as_ref())?;
//! let result = GraphBuilder::new(&source, 3, ExpansionMode::Dag).build("A", None);
//!
//! let renderer = GraphRenderer::new();
//! let mut dot = Vec::new();
//! renderer.render_dot(&result.graph, "A", 3, result.cycle_detected(), &mut dot)?;
//!
//! std::fs::write("dependencies.dot", dot).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod npm_compare;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod progress;
pub mod source;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
