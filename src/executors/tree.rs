//! Tree command executor

use std::io::{self, Write};

use console::style;
use miette::{Result, WrapErr};

use crate::config::TreeOptions;
use crate::executors::{
    CommandExecutor, echo_configuration, maybe_progress, report_build_diagnostics,
};
use crate::graph::{GraphBuilder, GraphRenderer};
use crate::source::create_source;
use crate::utils::string::pluralize;

pub struct TreeExecutor;

impl CommandExecutor for TreeExecutor {
    type Config = TreeOptions;

    fn execute(config: Self::Config) -> Result<()> {
        echo_configuration(&config.packages, &config.source, config.max_depth, config.mode);

        let source = create_source(&config.source)
            .wrap_err("Failed to initialize the dependency source")?;
        let renderer = GraphRenderer::new();
        let builder = GraphBuilder::new(source.as_ref(), config.max_depth, config.mode);

        for package in &config.packages {
            let progress = maybe_progress(&config.source);
            let result = builder.build(package, progress.as_ref());
            if let Some(p) = progress {
                p.finish();
            }

            report_build_diagnostics(&result);
            eprintln!(
                "\n{} Dependency tree for {} ({} {})",
                style("🌳").green(),
                style(package).bold(),
                style(result.graph.node_count()).yellow(),
                pluralize("package", result.graph.node_count())
            );

            let stdout = io::stdout();
            let mut out = stdout.lock();
            renderer
                .render_tree(&result.graph, package, &mut out)
                .wrap_err_with(|| format!("Failed to render dependency tree for '{package}'"))?;
            out.flush().map_err(crate::error::CarouselError::from)?;
        }

        Ok(())
    }
}
