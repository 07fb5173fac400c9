//! Report command implementation.
//!
//! Wires the GitHub catalog and the registry prober into the report
//! pipeline.

use std::io::Write;

use crate::config::ReportConfig;
use crate::discovery::GithubCatalog;
use crate::enrich::EnrichSummary;
use crate::error::Result;
use crate::http::HttpFetcher;
use crate::registry::RegistryProber;
use crate::report::generate;

/// The report command.
pub struct ReportCommand {
    config: ReportConfig,
}

impl ReportCommand {
    /// Create a new report command.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Get the command configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Generate the report into `writer`.
    pub fn execute<W: Write>(&self, writer: &mut W) -> Result<EnrichSummary> {
        let fetcher = HttpFetcher::with_timeout(self.config.timeout)?;
        let catalog = GithubCatalog::new(&self.config, fetcher.clone());
        let prober = RegistryProber::new(&self.config.registry_url, fetcher);

        let summary = generate(&catalog, &prober, &self.config, writer)?;
        writer.flush()?;

        tracing::debug!(
            "{} of {} driver images published, {} unavailable",
            summary.published,
            summary.probed,
            summary.unavailable()
        );

        Ok(summary)
    }
}
