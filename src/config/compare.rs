//! Compare command configuration

use crate::cli::ExpansionMode;
use crate::config::common::{SourceSelection, validate_max_depth};

#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub package: String,
    pub source: SourceSelection,
    pub max_depth: usize,
    pub mode: ExpansionMode,
}

impl CompareOptions {
    pub fn builder() -> CompareOptionsBuilder {
        CompareOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct CompareOptionsBuilder {
    package: Option<String>,
    source: Option<SourceSelection>,
    max_depth: Option<usize>,
    mode: Option<ExpansionMode>,
}

impl CompareOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, package: String) -> Self {
        self.package = Some(package);
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

impl crate::common::ConfigBuilder for CompareOptionsBuilder {
    type Config = CompareOptions;

    fn build(self) -> Result<Self::Config, crate::error::CarouselError> {
        let package = self.package.ok_or_else(|| {
            crate::error::CarouselError::ConfigurationError {
                message: "Missing required field: package".to_string(),
            }
        })?;

        let source = self.source.ok_or_else(|| {
            crate::error::CarouselError::ConfigurationError {
                message: "Missing required field: source".to_string(),
            }
        })?;
        if !source.is_registry() {
            return Err(crate::error::CarouselError::ConfigurationError {
                message: "compare requires the registry source; a fixture repository has no \
                          package manager to compare against"
                    .to_string(),
            });
        }

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

        Ok(CompareOptions {
            package,
            source,
            max_depth,
            mode,
        })
    }
}
