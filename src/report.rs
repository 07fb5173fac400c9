//! Report generation pipeline.
//!
//! Catalog source → enricher (registry probes) → formatter. The catalog is
//! fetched before anything is written, so a catalog failure leaves the
//! output untouched.

use std::io::Write;

use crate::config::ReportConfig;
use crate::discovery::CatalogSource;
use crate::driver::DriverEntry;
use crate::enrich::{EnrichSummary, Enricher};
use crate::error::Result;
use crate::registry::ImageProber;
use crate::render::render;

/// Fetch the catalog and probe every driver's image.
pub fn collect<C, P>(
    catalog: &C,
    prober: &P,
    config: &ReportConfig,
) -> Result<(Vec<DriverEntry>, EnrichSummary)>
where
    C: CatalogSource,
    P: ImageProber,
{
    let mut drivers = catalog.drivers()?;

    let languages: Vec<&str> = drivers.iter().map(|d| d.language.as_str()).collect();
    tracing::info!("{} language drivers found: {:?}", drivers.len(), languages);

    let summary = Enricher::new(prober, config.org.as_str(), config.hub_url.as_str())
        .with_concurrency(config.concurrency)
        .enrich(&mut drivers)?;

    Ok((drivers, summary))
}

/// Generate the full report into `writer`.
pub fn generate<C, P, W>(
    catalog: &C,
    prober: &P,
    config: &ReportConfig,
    writer: &mut W,
) -> Result<EnrichSummary>
where
    C: CatalogSource,
    P: ImageProber,
    W: Write,
{
    let (drivers, summary) = collect(catalog, prober, config)?;
    render(&drivers, config.format, writer)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Status;
    use crate::error::LangtableError;
    use crate::render::OutputFormat;

    struct FixedCatalog(Vec<DriverEntry>);

    impl CatalogSource for FixedCatalog {
        fn drivers(&self) -> Result<Vec<DriverEntry>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenCatalog;

    impl CatalogSource for BrokenCatalog {
        fn drivers(&self) -> Result<Vec<DriverEntry>> {
            Err(LangtableError::CatalogUnavailable {
                message: "HTTP 500".into(),
            })
        }
    }

    /// Publishes only the Go driver image.
    struct GoOnly;

    impl ImageProber for GoOnly {
        fn probe(&self, image: &str) -> bool {
            image == "bblfsh/go-driver"
        }
    }

    fn catalog() -> FixedCatalog {
        FixedCatalog(vec![
            DriverEntry::new("go", Status::Stable),
            DriverEntry::new("cobol", Status::Planning),
        ])
    }

    #[test]
    fn collect_enriches_catalog() {
        let (drivers, summary) = collect(&catalog(), &GoOnly, &ReportConfig::default()).unwrap();

        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[0].image_url, "https://hub.docker.com/r/bblfsh/go-driver/");
        assert!(drivers[1].image_url.is_empty());
        assert_eq!(summary.published, 1);
    }

    #[test]
    fn generate_writes_markdown_by_default() {
        let mut output = Vec::new();
        generate(&catalog(), &GoOnly, &ReportConfig::default(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("| go | go | stable |"));
        assert!(text.contains("[✓](https://hub.docker.com/r/bblfsh/go-driver/)"));
        assert!(text.contains("# In development"));
    }

    #[test]
    fn generate_writes_json_when_selected() {
        let config = ReportConfig::default().with_format(OutputFormat::Json);
        let mut output = Vec::new();
        generate(&catalog(), &GoOnly, &config, &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert!(parsed[1].get("image_url").is_none());
    }

    #[test]
    fn catalog_failure_writes_nothing() {
        let mut output = Vec::new();
        let result = generate(&BrokenCatalog, &GoOnly, &ReportConfig::default(), &mut output);

        assert!(matches!(result, Err(LangtableError::CatalogUnavailable { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn generating_twice_is_byte_identical() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        generate(&catalog(), &GoOnly, &ReportConfig::default(), &mut first).unwrap();
        generate(&catalog(), &GoOnly, &ReportConfig::default(), &mut second).unwrap();
        assert_eq!(first, second);
    }
}
