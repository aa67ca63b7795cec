//! Progress reporting for network expansions

use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Spinner shown while packages are fetched from a registry
///
/// Created per analysis run and only when stderr is an interactive
/// terminal; fixture-backed runs skip it entirely.
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        spinner.enable_steady_tick(TICK_INTERVAL);
        Self { spinner }
    }

    pub fn expanding_package(&self, package: &str) {
        self.spinner.set_message(format!("Fetching {package}..."));
    }

    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}
