//! Tree command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{SourceSelection, TreeOptions};
use crate::error::CarouselError;

impl FromCommand for TreeOptions {
    fn from_command(command: Commands) -> Result<Self, CarouselError> {
        match command {
            Commands::Tree {
                packages,
                source,
                traversal,
            } => {
                let selection = SourceSelection::resolve(source.registry, source.fixture)?;
                TreeOptions::builder()
                    .with_packages(packages)
                    .with_source(selection)
                    .with_max_depth(traversal.max_depth)
                    .with_mode(traversal.mode)
                    .build()
            }
            _ => Err(CarouselError::ConfigurationError {
                message: "Invalid command type for TreeOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TreeOptions);

/// Execute the tree command for rendering ASCII dependency trees
pub fn execute_tree_command(command: Commands) -> Result<()> {
    let config =
        TreeOptions::from_command(command).wrap_err("Failed to parse tree command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::tree::TreeExecutor;
    TreeExecutor::execute(config)
}
