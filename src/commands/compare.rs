//! Compare command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{CompareOptions, SourceSelection};
use crate::error::CarouselError;

impl FromCommand for CompareOptions {
    fn from_command(command: Commands) -> Result<Self, CarouselError> {
        match command {
            Commands::Compare {
                package,
                source,
                traversal,
            } => {
                let selection = SourceSelection::resolve(source.registry, source.fixture)?;
                CompareOptions::builder()
                    .with_package(package)
                    .with_source(selection)
                    .with_max_depth(traversal.max_depth)
                    .with_mode(traversal.mode)
                    .build()
            }
            _ => Err(CarouselError::ConfigurationError {
                message: "Invalid command type for CompareOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CompareOptions);

/// Execute the compare command against npm's own output
pub fn execute_compare_command(command: Commands) -> Result<()> {
    let config = CompareOptions::from_command(command)
        .wrap_err("Failed to parse compare command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::compare::CompareExecutor;
    CompareExecutor::execute(config)
}
