//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{GraphOptions, SourceSelection};
use crate::error::CarouselError;

impl FromCommand for GraphOptions {
    fn from_command(command: Commands) -> Result<Self, CarouselError> {
        match command {
            Commands::Graph {
                packages,
                source,
                traversal,
                output,
            } => {
                let selection = SourceSelection::resolve(source.registry, source.fixture)?;
                GraphOptions::builder()
                    .with_packages(packages)
                    .with_source(selection)
                    .with_max_depth(traversal.max_depth)
                    .with_mode(traversal.mode)
                    .with_output(output)
                    .build()
            }
            _ => Err(CarouselError::ConfigurationError {
                message: "Invalid command type for GraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the graph command for generating DOT graph descriptions
pub fn execute_graph_command(command: Commands) -> Result<()> {
    let config = GraphOptions::from_command(command)
        .wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}
