//! Order command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::OrderOptions;
use crate::executors::{
    CommandExecutor, echo_configuration, maybe_progress, report_build_diagnostics,
};
use crate::graph::{GraphBuilder, load_order};
use crate::source::create_source;
use crate::utils::string::pluralize;

pub struct OrderExecutor;

impl CommandExecutor for OrderExecutor {
    type Config = OrderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        echo_configuration(&config.packages, &config.source, config.max_depth, config.mode);

        let source = create_source(&config.source)
            .wrap_err("Failed to initialize the dependency source")?;
        let builder = GraphBuilder::new(source.as_ref(), config.max_depth, config.mode);

        for package in &config.packages {
            let progress = maybe_progress(&config.source);
            let result = builder.build(package, progress.as_ref());
            if let Some(p) = progress {
                p.finish();
            }

            report_build_diagnostics(&result);

            let order = load_order(&result.graph);

            // Dependencies first, the start package re-appended as the final
            // load.
            let dependencies: Vec<&String> =
                order.order.iter().filter(|name| *name != package).collect();

            println!("\nLoad order for '{package}':");
            for (i, name) in dependencies.iter().enumerate() {
                println!("{:2}. {name}", i + 1);
            }
            println!("Final load: {package}");
            println!("Total dependencies to load: {}", dependencies.len());

            if !order.is_complete() {
                println!(
                    "Unresolved packages (residual cycle): {}",
                    order.residual.join(", ")
                );
                eprintln!(
                    "{} {} {} could not be ordered",
                    style("⚠").yellow(),
                    style(order.residual.len()).red().bold(),
                    pluralize("package", order.residual.len())
                );
            }
        }

        Ok(())
    }
}
