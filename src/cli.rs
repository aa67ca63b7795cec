use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{SourceArgs, TraversalArgs};

#[derive(Parser)]
#[command(
    name = "dep-carousel",
    about = "🎠 Explore and visualize npm package dependency graphs",
    long_about = "dep-carousel expands the transitive dependency graph of an npm package, \
                  drawing direct-dependency data from a live registry or a fixture file, and \
                  renders it as an ASCII tree, a Graphviz DOT description, or a topological \
                  load order.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the dependency tree of one or more packages
    ///
    /// Expands each named package up to the configured depth and prints an
    /// indented ASCII tree of the recorded dependency edges. Repeated
    /// packages on independent branches are shown once per occurrence in
    /// tree mode; use --mode dag to collapse repeated expansions.
    #[command(
        long_about = "Expand the transitive dependencies of each named package and render the \
                      result as a box-drawing ASCII tree. Version constraints other than the \
                      wildcard are shown in parentheses next to the dependency they apply to. \
                      Cyclic dependency paths are reported on stderr and never expanded."
    )]
    Tree {
        /// Packages to analyze
        #[arg(required = true, value_name = "PACKAGE")]
        packages: Vec<String>,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        traversal: TraversalArgs,
    },

    /// Generate a Graphviz DOT description of the dependency graph
    ///
    /// Produces a complete digraph document with one declaration per package
    /// and per dependency edge, ready to feed into `dot` or any other
    /// Graphviz-compatible layout tool. The start package is visually
    /// distinguished from the rest of the graph.
    #[command(
        long_about = "Expand the transitive dependencies of each named package and emit a \
                      self-contained Graphviz DOT document: node declarations for every \
                      observed package, edge declarations labeled with version constraints, \
                      and a visual note when cyclic dependencies were detected. Use --output \
                      to write the document to a file instead of stdout."
    )]
    Graph {
        /// Packages to analyze
        #[arg(required = true, value_name = "PACKAGE")]
        packages: Vec<String>,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        traversal: TraversalArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "DEP_CAROUSEL_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Compute the load order of a package's dependencies
    ///
    /// Derives a deterministic topological ordering of the built graph via
    /// in-degree counting, printing dependencies first and the start package
    /// as the final load. Packages stuck in a residual cycle are reported
    /// separately.
    #[command(
        long_about = "Expand the transitive dependencies of each named package, then compute a \
                      topological load order over the recorded graph using in-degree counting \
                      with a FIFO queue. The ordering is deterministic for a fixed graph. Nodes \
                      that cannot be ordered (residual cycles) are listed after the order."
    )]
    Order {
        /// Packages to analyze
        #[arg(required = true, value_name = "PACKAGE")]
        packages: Vec<String>,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        traversal: TraversalArgs,
    },

    /// Compare our tree rendering against npm's own output
    ///
    /// Builds the graph from the registry, renders our tree, and runs
    /// `npm ls` against a scratch project depending on the package so the
    /// two renderings can be compared side by side. Registry mode only.
    #[command(
        long_about = "Capture the output of `npm ls` for a scratch project that depends on the \
                      named package, print it next to our own tree rendering, and report a \
                      coarse divergence analysis. This command requires the registry source; \
                      fixture repositories have no package manager to compare against."
    )]
    Compare {
        /// Name of the package to compare
        #[arg(value_name = "PACKAGE")]
        package: String,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        traversal: TraversalArgs,
    },
}

/// How repeated packages are expanded during graph construction
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ExpansionMode {
    /// Expand every reachable occurrence independently (can grow
    /// combinatorially on diamond-shaped graphs)
    Tree,
    /// Expand each package name at most once, keyed on identity (canonical
    /// DAG; a package keeps the subtree from its first expansion)
    Dag,
}

impl fmt::Display for ExpansionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpansionMode::Tree => write!(f, "tree"),
            ExpansionMode::Dag => write!(f, "dag"),
        }
    }
}
