//! Compare command executor

use std::io::{self, Write};

use console::style;
use miette::{Result, WrapErr};

use crate::config::CompareOptions;
use crate::executors::{
    CommandExecutor, echo_configuration, maybe_progress, report_build_diagnostics,
};
use crate::graph::{GraphBuilder, GraphRenderer};
use crate::npm_compare;
use crate::source::create_source;

// Slack applied to the line-count comparison: npm's output carries a few
// framing lines that are not packages
const LINE_COUNT_SLACK: usize = 5;

pub struct CompareExecutor;

impl CommandExecutor for CompareExecutor {
    type Config = CompareOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let packages = std::slice::from_ref(&config.package);
        echo_configuration(packages, &config.source, config.max_depth, config.mode);

        let source = create_source(&config.source)
            .wrap_err("Failed to initialize the dependency source")?;
        let builder = GraphBuilder::new(source.as_ref(), config.max_depth, config.mode);

        let progress = maybe_progress(&config.source);
        let result = builder.build(&config.package, progress.as_ref());
        if let Some(p) = progress {
            p.finish();
        }
        report_build_diagnostics(&result);

        let npm_output = npm_compare::npm_ls_output(&config.package)
            .wrap_err("Failed to capture npm's dependency tree")?;

        println!("\n📊 npm ls output:");
        println!("{npm_output}");

        println!("📊 Our rendering:");
        let stdout = io::stdout();
        let mut out = stdout.lock();
        GraphRenderer::new()
            .render_tree(&result.graph, &config.package, &mut out)
            .wrap_err("Failed to render our dependency tree")?;
        out.flush().map_err(crate::error::CarouselError::from)?;
        drop(out);

        analyze_divergence(result.graph.node_count(), &npm_output);

        Ok(())
    }
}

fn analyze_divergence(our_nodes: usize, npm_output: &str) {
    let npm_lines = npm_output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count();

    eprintln!("\n{} Divergence analysis:", style("📝").cyan());
    eprintln!("  {} Nodes in our graph: {our_nodes}", style("→").dim());
    eprintln!("  {} Lines in npm output: {npm_lines}", style("→").dim());

    if our_nodes + LINE_COUNT_SLACK < npm_lines {
        eprintln!(
            "  {} Our analysis shows fewer dependencies than npm",
            style("✗").red()
        );
        eprintln!("    Likely causes:");
        eprintln!("      - npm includes devDependencies and peerDependencies");
        eprintln!("      - different expansion depth");
        eprintln!("      - different resolved versions");
    } else if our_nodes > npm_lines + LINE_COUNT_SLACK {
        eprintln!(
            "  {} Our analysis shows more dependencies than npm",
            style("✗").red()
        );
        eprintln!("    Likely causes:");
        eprintln!("      - npm deduplicates shared dependencies");
        eprintln!("      - different conflict resolution");
    } else {
        eprintln!(
            "  {} Our rendering roughly matches npm",
            style("✓").green()
        );
    }
}
