//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::cli::ExpansionMode;
use crate::constants::traversal::DEFAULT_MAX_DEPTH;

/// Dependency source arguments shared by all commands
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Base URL of an npm-compatible registry (network mode)
    #[arg(long, value_name = "URL", env = "DEP_CAROUSEL_REGISTRY")]
    pub registry: Option<String>,

    /// Path to a fixture repository file (offline mode)
    #[arg(long, value_name = "PATH", env = "DEP_CAROUSEL_FIXTURE")]
    pub fixture: Option<PathBuf>,
}

/// Traversal bound arguments shared by all commands
#[derive(Args, Debug, Clone)]
pub struct TraversalArgs {
    /// Maximum dependency depth to expand
    #[arg(
        long,
        value_name = "DEPTH",
        default_value_t = DEFAULT_MAX_DEPTH,
        env = "DEP_CAROUSEL_MAX_DEPTH"
    )]
    pub max_depth: usize,

    /// Graph expansion mode
    #[arg(long, value_enum, default_value = "tree", env = "DEP_CAROUSEL_MODE")]
    pub mode: ExpansionMode,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::CarouselError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::CarouselError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::CarouselError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
