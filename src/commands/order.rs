//! Order command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{OrderOptions, SourceSelection};
use crate::error::CarouselError;

impl FromCommand for OrderOptions {
    fn from_command(command: Commands) -> Result<Self, CarouselError> {
        match command {
            Commands::Order {
                packages,
                source,
                traversal,
            } => {
                let selection = SourceSelection::resolve(source.registry, source.fixture)?;
                OrderOptions::builder()
                    .with_packages(packages)
                    .with_source(selection)
                    .with_max_depth(traversal.max_depth)
                    .with_mode(traversal.mode)
                    .build()
            }
            _ => Err(CarouselError::ConfigurationError {
                message: "Invalid command type for OrderOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(OrderOptions);

/// Execute the order command for computing dependency load orders
pub fn execute_order_command(command: Commands) -> Result<()> {
    let config = OrderOptions::from_command(command)
        .wrap_err("Failed to parse order command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::order::OrderExecutor;
    OrderExecutor::execute(config)
}
