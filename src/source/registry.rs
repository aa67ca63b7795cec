//! Registry-backed dependency source

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{DependencySource, DirectDependency};
use crate::constants::registry::{CONNECT_TIMEOUT, REQUEST_TIMEOUT};
use crate::error::CarouselError;

/// Dependency source backed by an npm-compatible registry
///
/// Fetches the packument for a package and reads the dependency map of its
/// latest version. All requests are synchronous and bounded by the
/// registry timeouts; the graph builder issues them one node at a time.
pub struct RegistrySource {
    base_url: String,
    client: Client,
}

/// The slice of an npm packument this tool cares about
#[derive(Debug, Deserialize)]
struct Packument {
    #[serde(rename = "dist-tags", default)]
    dist_tags: DistTags,
    #[serde(default)]
    versions: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
struct DistTags {
    latest: Option<String>,
}

impl RegistrySource {
    pub fn new(base_url: &str) -> Result<Self, CarouselError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(format!("dep-carousel/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| CarouselError::HttpClient { source })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn fetch_packument(&self, package: &str) -> Result<Packument, CarouselError> {
        let url = format!("{}/{}", self.base_url, package);

        let response =
            self.client
                .get(&url)
                .send()
                .map_err(|source| CarouselError::RegistryUnavailable {
                    package: package.to_string(),
                    source,
                })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CarouselError::PackageNotFound {
                package: package.to_string(),
            });
        }
        if !status.is_success() {
            return Err(CarouselError::RegistryStatus {
                package: package.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json()
            .map_err(|err| CarouselError::MalformedMetadata {
                package: package.to_string(),
                message: err.to_string(),
            })
    }

    fn extract_dependencies(
        package: &str,
        packument: &Packument,
    ) -> Result<Vec<DirectDependency>, CarouselError> {
        // Prefer the published latest tag; fall back to the last version key,
        // which preserve_order keeps in registry publish order.
        let latest = match &packument.dist_tags.latest {
            Some(tag) => Some(tag.clone()),
            None => packument.versions.keys().last().cloned(),
        };

        let Some(latest) = latest else {
            return Ok(Vec::new());
        };
        let Some(version) = packument.versions.get(&latest) else {
            return Ok(Vec::new());
        };

        match version.get("dependencies") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Object(dependencies)) => dependencies
                .iter()
                .map(|(name, constraint)| {
                    let constraint =
                        constraint
                            .as_str()
                            .ok_or_else(|| CarouselError::MalformedMetadata {
                                package: package.to_string(),
                                message: format!(
                                    "constraint for dependency '{name}' is not a string"
                                ),
                            })?;
                    Ok(DirectDependency {
                        name: name.clone(),
                        constraint: constraint.to_string(),
                    })
                })
                .collect(),
            Some(_) => Err(CarouselError::MalformedMetadata {
                package: package.to_string(),
                message: "the dependencies field is not an object".to_string(),
            }),
        }
    }
}

impl DependencySource for RegistrySource {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<DirectDependency>, CarouselError> {
        let packument = self.fetch_packument(package)?;
        Self::extract_dependencies(package, &packument)
    }
}
