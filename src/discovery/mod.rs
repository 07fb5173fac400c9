//! Driver catalog discovery.
//!
//! This module provides:
//! - [`CatalogSource`] trait, the read side of the catalog
//! - [`GithubCatalog`] for the official drivers published on GitHub
//! - Manifest and MAINTAINERS parsing
//!
//! Catalog order matters: the report splits the list at the first driver
//! below the supported threshold, so sources return entries sorted with
//! [`sort_catalog`].

pub mod github;
pub mod maintainers;
pub mod manifest;

pub use github::GithubCatalog;
pub use maintainers::parse_maintainers;
pub use manifest::DriverManifest;

use std::cmp::Ordering;

use crate::driver::DriverEntry;
use crate::error::Result;

/// A source of driver catalog entries.
pub trait CatalogSource {
    /// Fetch every known driver, sorted for reporting.
    fn drivers(&self) -> Result<Vec<DriverEntry>>;
}

/// Sort drivers by status (most mature first), then by number of
/// features (most first), then by language key.
pub fn sort_catalog(drivers: &mut [DriverEntry]) {
    drivers.sort_by(compare_drivers);
}

fn compare_drivers(a: &DriverEntry, b: &DriverEntry) -> Ordering {
    b.status
        .cmp(&a.status)
        .then_with(|| b.features.len().cmp(&a.features.len()))
        .then_with(|| a.language.cmp(&b.language))
}
