//! Order command configuration

use crate::cli::ExpansionMode;
use crate::config::common::{SourceSelection, validate_max_depth, validate_packages};

#[derive(Debug, Clone)]
pub struct OrderOptions {
    pub packages: Vec<String>,
    pub source: SourceSelection,
    pub max_depth: usize,
    pub mode: ExpansionMode,
}

impl OrderOptions {
    pub fn builder() -> OrderOptionsBuilder {
        OrderOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct OrderOptionsBuilder {
    packages: Option<Vec<String>>,
    source: Option<SourceSelection>,
    max_depth: Option<usize>,
    mode: Option<ExpansionMode>,
}

impl OrderOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_packages(mut self, packages: Vec<String>) -> Self {
        self.packages = Some(packages);
        self
    }

    pub fn with_source(mut self, source: SourceSelection) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_mode(mut self, mode: ExpansionMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

impl crate::common::ConfigBuilder for OrderOptionsBuilder {
    type Config = OrderOptions;

    fn build(self) -> Result<Self::Config, crate::error::CarouselError> {
        let packages = self.packages.ok_or_else(|| {
            crate::error::CarouselError::ConfigurationError {
                message: "Missing required field: packages".to_string(),
            }
        })?;
        validate_packages(&packages)?;

        let source = self.source.ok_or_else(|| {
            crate::error::CarouselError::ConfigurationError {
                message: "Missing required field: source".to_string(),
            }
        })?;

        let max_depth = self.max_depth.ok_or_else(|| {
            crate::error::CarouselError::ConfigurationError {
                message: "Missing required field: max_depth".to_string(),
            }
        })?;
        validate_max_depth(max_depth)?;

        let mode = self.mode.ok_or_else(|| {
            crate::error::CarouselError::ConfigurationError {
                message: "Missing required field: mode".to_string(),
            }
        })?;

        Ok(OrderOptions {
            packages,
            source,
            max_depth,
            mode,
        })
    }
}
