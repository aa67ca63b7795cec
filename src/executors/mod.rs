//! Command executors that handle the actual logic for each command

pub mod compare;
pub mod graph;
pub mod order;
pub mod tree;

use console::style;
use miette::Result;

use crate::cli::ExpansionMode;
use crate::config::SourceSelection;
use crate::constants::traversal::DEPTH_WARN_THRESHOLD;
use crate::graph::GraphBuildResult;
use crate::progress::ProgressReporter;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Echo the effective run configuration before traversal begins
pub(crate) fn echo_configuration(
    packages: &[String],
    source: &SourceSelection,
    max_depth: usize,
    mode: ExpansionMode,
) {
    eprintln!(
        "{} Analyzing {}",
        style("🎠").cyan(),
        style(packages.join(", ")).bold()
    );
    eprintln!("  {} Source: {}", style("→").dim(), source.describe());
    eprintln!("  {} Max depth: {}", style("→").dim(), max_depth);
    eprintln!("  {} Expansion mode: {}", style("→").dim(), mode);

    if max_depth > DEPTH_WARN_THRESHOLD {
        eprintln!(
            "  {} Deep expansions can take a long time against a live registry",
            style("⚠").yellow()
        );
    }
}

/// Spinner for network expansions when stderr is a terminal
pub(crate) fn maybe_progress(source: &SourceSelection) -> Option<ProgressReporter> {
    if source.is_registry() && console::Term::stderr().is_term() {
        Some(ProgressReporter::new())
    } else {
        None
    }
}

/// Surface tolerated failures and observed cycles as stderr diagnostics
pub(crate) fn report_build_diagnostics(result: &GraphBuildResult) {
    for failure in &result.failures {
        eprintln!(
            "{} Skipping '{}': {}",
            style("⚠").yellow(),
            style(&failure.package).bold(),
            failure.reason
        );
    }

    for cycle in &result.cycles {
        eprintln!(
            "{} Cyclic dependency detected: {}",
            style("⚠").yellow(),
            style(cycle.join(" -> ")).bold()
        );
    }
}
