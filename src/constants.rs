//! Configuration constants for dep-carousel
//!
//! This module contains all configurable constants used throughout the
//! application. These values can be overridden through environment variables
//! where the CLI exposes them.

use std::time::Duration;

/// Package registry configuration
pub mod registry {
    use super::*;

    /// Registry queried when neither --registry nor --fixture is given
    pub const DEFAULT_URL: &str = "https://registry.npmjs.org";

    /// Per-request timeout for packument fetches
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
}

/// Traversal bound configuration
pub mod traversal {
    /// Expansion depth used when --max-depth is not given
    pub const DEFAULT_MAX_DEPTH: usize = 3;

    /// Depths above this trigger a long-run warning, never an error
    pub const DEPTH_WARN_THRESHOLD: usize = 10;
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the carousel animation
    pub const SPINNER_FRAMES: &[&str] = &[
        "🎠 ", // Standard carousel
        "🎠·", // Starting to turn
        "🎠•", // Quarter turn
        "🎠●", // Half turn
        "🎠•", // Three quarters
        "🎠·", // Coming around
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_constants() {
        assert!(registry::DEFAULT_URL.starts_with("https://"));
        assert_eq!(registry::REQUEST_TIMEOUT, Duration::from_secs(10));
        assert!(registry::CONNECT_TIMEOUT < registry::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_traversal_constants() {
        assert!(traversal::DEFAULT_MAX_DEPTH >= 1);
        assert!(traversal::DEPTH_WARN_THRESHOLD > traversal::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 6);
    }
}
