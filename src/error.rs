use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CarouselError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(carousel::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in fixture file '{path}'")]
    #[diagnostic(
        code(carousel::fixture_parse_error),
        help("A fixture file is a JSON object mapping each package name to an array of dependency names")
    )]
    FixtureParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to reach the package registry for '{package}'")]
    #[diagnostic(
        code(carousel::registry_unavailable),
        help("Check the registry URL and your network connection")
    )]
    RegistryUnavailable {
        package: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("The registry answered HTTP {status} for '{package}'")]
    #[diagnostic(
        code(carousel::registry_unavailable),
        help("The registry may be overloaded or the request malformed; try again later")
    )]
    RegistryStatus { package: String, status: u16 },

    #[error("Package '{package}' was not found in the registry")]
    #[diagnostic(
        code(carousel::package_not_found),
        help("Check the package name spelling; scoped packages need their full @scope/name")
    )]
    PackageNotFound { package: String },

    #[error("Malformed registry metadata for '{package}': {message}")]
    #[diagnostic(
        code(carousel::malformed_metadata),
        help("The registry returned a packument this tool cannot interpret")
    )]
    MalformedMetadata { package: String, message: String },

    #[error("Failed to build the registry HTTP client")]
    #[diagnostic(
        code(carousel::registry_unavailable),
        help("This is likely an internal error - please report it")
    )]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to run {tool}: {message}")]
    #[diagnostic(
        code(carousel::external_tool_error),
        help("Check that the tool is installed and on your PATH")
    )]
    ExternalToolError { tool: String, message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(carousel::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(carousel::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(carousel::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(carousel::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },
}
