//! Report configuration.
//!
//! [`ReportConfig`] carries every endpoint and knob the report pipeline
//! needs. The defaults target the public Babelfish services; tests point
//! the URLs at local mock servers instead.

use std::time::Duration;

use crate::render::OutputFormat;

/// GitHub organization that owns the official drivers.
pub const DEFAULT_ORG: &str = "bblfsh";

/// Maximum number of registry probes in flight.
pub const DEFAULT_CONCURRENCY: usize = 3;

/// Settings for a single report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// GitHub organization, also used as the image namespace.
    pub org: String,

    /// Base URL of the GitHub REST API.
    pub github_api_url: String,

    /// Base URL serving raw repository files.
    pub raw_content_url: String,

    /// Base URL of the container registry (v2 API).
    pub registry_url: String,

    /// Base URL of the public image pages.
    pub hub_url: String,

    /// Maximum number of concurrent registry probes.
    pub concurrency: usize,

    /// Timeout applied to every HTTP request.
    pub timeout: Duration,

    /// Output format of the rendered report.
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            org: DEFAULT_ORG.to_string(),
            github_api_url: "https://api.github.com".to_string(),
            raw_content_url: "https://raw.githubusercontent.com".to_string(),
            registry_url: "https://registry-1.docker.io".to_string(),
            hub_url: "https://hub.docker.com".to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            timeout: Duration::from_secs(30),
            format: OutputFormat::Markdown,
        }
    }
}

impl ReportConfig {
    /// Use the given output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
