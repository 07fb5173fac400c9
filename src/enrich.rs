//! Container image enrichment.
//!
//! Probes the registry for every driver's image and records the public
//! image page on entries whose image is published. Probes run on a
//! dedicated worker pool, so at most `concurrency` are in flight; the call
//! returns only once every probe has finished.

use rayon::prelude::*;

use crate::driver::DriverEntry;
use crate::error::Result;
use crate::registry::ImageProber;

/// Canonical image name of a language driver.
pub fn image_name(org: &str, language: &str) -> String {
    format!("{}/{}-driver", org, language)
}

/// Public page of a published image.
pub fn image_url(hub_url: &str, image: &str) -> String {
    format!("{}/r/{}/", hub_url.trim_end_matches('/'), image)
}

/// Outcome counts of an enrichment run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    /// Number of images probed.
    pub probed: usize,
    /// Number of images found published.
    pub published: usize,
}

impl EnrichSummary {
    /// Probes that found no published image (missing or failed).
    pub fn unavailable(&self) -> usize {
        self.probed - self.published
    }
}

/// Fills in `image_url` on catalog entries.
pub struct Enricher<'a, P: ImageProber> {
    prober: &'a P,
    org: String,
    hub_url: String,
    concurrency: usize,
}

impl<'a, P: ImageProber> Enricher<'a, P> {
    /// Create an enricher probing images under `org`.
    pub fn new(prober: &'a P, org: impl Into<String>, hub_url: impl Into<String>) -> Self {
        Self {
            prober,
            org: org.into(),
            hub_url: hub_url.into(),
            concurrency: crate::config::DEFAULT_CONCURRENCY,
        }
    }

    /// Limit the number of probes in flight. Zero is treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Get the probe concurrency limit.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Probe every entry in place.
    ///
    /// Entries keep their positions. Each worker writes only the entry it
    /// was handed, and a failed probe clears that entry's `image_url`
    /// without affecting the rest of the batch.
    pub fn enrich(&self, drivers: &mut [DriverEntry]) -> Result<EnrichSummary> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.concurrency)
            .thread_name(|i| format!("probe-{}", i))
            .build()?;

        let published = pool.install(|| {
            drivers
                .par_iter_mut()
                .map(|driver| self.enrich_one(driver))
                .filter(|&found| found)
                .count()
        });

        Ok(EnrichSummary {
            probed: drivers.len(),
            published,
        })
    }

    fn enrich_one(&self, driver: &mut DriverEntry) -> bool {
        let image = image_name(&self.org, &driver.language);
        let found = self.prober.probe(&image);

        driver.image_url = if found {
            image_url(&self.hub_url, &image)
        } else {
            String::new()
        };

        found
    }
}
