//! Graph command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::GraphOptions;
use crate::executors::{
    CommandExecutor, echo_configuration, maybe_progress, report_build_diagnostics,
};
use crate::graph::{GraphBuilder, GraphRenderer};
use crate::source::create_source;

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        echo_configuration(&config.packages, &config.source, config.max_depth, config.mode);

        let source = create_source(&config.source)
            .wrap_err("Failed to initialize the dependency source")?;
        let renderer = GraphRenderer::new();
        let builder = GraphBuilder::new(source.as_ref(), config.max_depth, config.mode);
        let multi = config.packages.len() > 1;

        for package in &config.packages {
            let progress = maybe_progress(&config.source);
            let result = builder.build(package, progress.as_ref());
            if let Some(p) = progress {
                p.finish();
            }

            report_build_diagnostics(&result);

            // Determine output destination
            let destination = config
                .output
                .as_ref()
                .map(|base| output_path_for(base, package, multi));

            let mut output_writer: Box<dyn io::Write> = if let Some(path) = destination.as_ref() {
                Box::new(BufWriter::new(
                    File::create(path).into_diagnostic().wrap_err_with(|| {
                        format!("Failed to create output file '{}'", path.display())
                    })?,
                ))
            } else {
                Box::new(io::stdout())
            };

            renderer
                .render_dot(
                    &result.graph,
                    package,
                    config.max_depth,
                    result.cycle_detected(),
                    output_writer.as_mut(),
                )
                .wrap_err_with(|| format!("Failed to render DOT graph for '{package}'"))?;
            output_writer
                .flush()
                .map_err(crate::error::CarouselError::from)?;

            if let Some(path) = destination {
                eprintln!(
                    "{} Graph written to {}",
                    style("✓").green(),
                    style(path.display()).bold()
                );
                eprintln!(
                    "  {} Render it with: dot -Tpng {} -o graph.png",
                    style("💡").yellow(),
                    path.display()
                );
            }
        }

        Ok(())
    }
}

// When several packages share one --output, suffix the file stem per package
fn output_path_for(base: &Path, package: &str, multi: bool) -> PathBuf {
    if !multi {
        return base.to_path_buf();
    }

    let sanitized: String = package
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("graph");
    let file_name = match base.extension().and_then(|s| s.to_str()) {
        Some(ext) => format!("{stem}-{sanitized}.{ext}"),
        None => format!("{stem}-{sanitized}"),
    };
    base.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_package_keeps_output_path() {
        let path = output_path_for(Path::new("deps.dot"), "left-pad", false);
        assert_eq!(path, PathBuf::from("deps.dot"));
    }

    #[test]
    fn test_multiple_packages_suffix_the_stem() {
        let path = output_path_for(Path::new("out/deps.dot"), "left-pad", true);
        assert_eq!(path, PathBuf::from("out/deps-left_pad.dot"));
    }

    #[test]
    fn test_scoped_package_names_are_sanitized() {
        let path = output_path_for(Path::new("deps.dot"), "@scope/pkg", true);
        assert_eq!(path, PathBuf::from("deps-_scope_pkg.dot"));
    }
}
