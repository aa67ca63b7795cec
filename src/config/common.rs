//! Shared configuration pieces: source selection and traversal validation

use std::path::PathBuf;

use crate::constants::registry::DEFAULT_URL;
use crate::error::CarouselError;

/// The dependency source a run was configured with
///
/// Resolved once from the CLI flags and injected into every component that
/// needs it; exactly one backing store is active per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    Registry { url: String },
    Fixture { path: PathBuf },
}

impl SourceSelection {
    /// Resolve and validate the CLI source flags
    ///
    /// Neither flag selects the default registry; both at once is a
    /// configuration conflict.
    pub fn resolve(
        registry: Option<String>,
        fixture: Option<PathBuf>,
    ) -> Result<Self, CarouselError> {
        match (registry, fixture) {
            (Some(_), Some(_)) => Err(CarouselError::ConfigurationError {
                message: "--registry and --fixture are mutually exclusive; pick one dependency \
                          source"
                    .to_string(),
            }),
            (Some(url), None) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(CarouselError::ConfigurationError {
                        message: format!(
                            "registry URL must start with http:// or https://, got '{url}'"
                        ),
                    });
                }
                Ok(SourceSelection::Registry { url })
            }
            (None, Some(path)) => {
                if !path.exists() {
                    return Err(CarouselError::ConfigurationError {
                        message: format!("fixture file not found: {}", path.display()),
                    });
                }
                Ok(SourceSelection::Fixture { path })
            }
            (None, None) => Ok(SourceSelection::Registry {
                url: DEFAULT_URL.to_string(),
            }),
        }
    }

    pub fn is_registry(&self) -> bool {
        matches!(self, SourceSelection::Registry { .. })
    }

    /// Human-readable description for the configuration echo
    pub fn describe(&self) -> String {
        match self {
            SourceSelection::Registry { url } => format!("registry {url}"),
            SourceSelection::Fixture { path } => format!("fixture {}", path.display()),
        }
    }
}

/// The depth bound must be a positive integer
pub fn validate_max_depth(max_depth: usize) -> Result<(), CarouselError> {
    if max_depth == 0 {
        return Err(CarouselError::ConfigurationError {
            message: "--max-depth must be a positive integer".to_string(),
        });
    }
    Ok(())
}

/// At least one package selector is required
pub fn validate_packages(packages: &[String]) -> Result<(), CarouselError> {
    if packages.is_empty() {
        return Err(CarouselError::ConfigurationError {
            message: "at least one package name is required".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_is_the_public_registry() {
        let selection = SourceSelection::resolve(None, None).unwrap();
        assert_eq!(
            selection,
            SourceSelection::Registry {
                url: DEFAULT_URL.to_string(),
            }
        );
    }

    #[test]
    fn test_both_sources_conflict() {
        let err = SourceSelection::resolve(
            Some("https://registry.npmjs.org".to_string()),
            Some(PathBuf::from("fixture.json")),
        )
        .unwrap_err();

        assert!(matches!(err, CarouselError::ConfigurationError { .. }));
    }

    #[test]
    fn test_registry_url_scheme_is_validated() {
        let err = SourceSelection::resolve(Some("ftp://example.org".to_string()), None)
            .unwrap_err();
        assert!(matches!(err, CarouselError::ConfigurationError { .. }));

        let ok = SourceSelection::resolve(Some("http://localhost:4873".to_string()), None);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_missing_fixture_file_is_rejected() {
        let err =
            SourceSelection::resolve(None, Some(PathBuf::from("/nonexistent/fixture.json")))
                .unwrap_err();
        assert!(matches!(err, CarouselError::ConfigurationError { .. }));
    }

    #[test]
    fn test_max_depth_must_be_positive() {
        assert!(validate_max_depth(0).is_err());
        assert!(validate_max_depth(1).is_ok());
        assert!(validate_max_depth(100).is_ok());
    }

    #[test]
    fn test_packages_must_not_be_empty() {
        assert!(validate_packages(&[]).is_err());
        assert!(validate_packages(&["left-pad".to_string()]).is_ok());
    }
}
