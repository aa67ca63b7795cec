//! Comparison shim around npm's own tree rendering
//!
//! Builds a scratch project depending on the package under analysis and
//! captures the output of `npm ls` for it. This module performs no graph
//! work of its own; it only shells out and relays text.

use std::process::Command;

use serde_json::{Map, Value, json};
use tempfile::TempDir;

use crate::error::CarouselError;

/// Capture `npm ls` output for a scratch project depending on `package`
///
/// The scratch directory is removed when this function returns. npm exits
/// with status 1 when dependencies are unmet, which is expected here since
/// nothing is installed; both 0 and 1 carry a usable tree.
pub fn npm_ls_output(package: &str) -> Result<String, CarouselError> {
    let scratch = TempDir::new()?;

    let mut dependencies = Map::new();
    dependencies.insert(package.to_string(), Value::String("latest".to_string()));
    let manifest = json!({
        "name": "dep-carousel-compare",
        "version": "1.0.0",
        "dependencies": dependencies
    });
    std::fs::write(
        scratch.path().join("package.json"),
        serde_json::to_string_pretty(&manifest)?,
    )?;

    let output = Command::new("npm")
        .arg("ls")
        .arg("--prefix")
        .arg(scratch.path())
        .output()
        .map_err(|err| CarouselError::ExternalToolError {
            tool: "npm".to_string(),
            message: err.to_string(),
        })?;

    if !matches!(output.status.code(), Some(0) | Some(1)) {
        return Err(CarouselError::ExternalToolError {
            tool: "npm".to_string(),
            message: format!("npm ls exited with {}", output.status),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
