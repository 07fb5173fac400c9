//! Language driver catalog entries.
//!
//! A [`DriverEntry`] is created by the catalog source, gets its
//! `image_url` filled in once by the enricher, and is then only read.

mod status;

pub use status::{Feature, Status};

use serde::{Deserialize, Serialize};

/// A person responsible for a driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maintainer {
    /// Full name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// GitHub handle, without the leading `@`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Maintainer {
    /// Create a maintainer with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the GitHub handle.
    pub fn with_github(mut self, handle: impl Into<String>) -> Self {
        self.github = Some(handle.into());
        self
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Metadata for a single language driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverEntry {
    /// Language key, unique across the catalog.
    pub language: String,

    /// Display name. Empty falls back to the language key.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Development status.
    pub status: Status,

    /// Advertised capabilities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,

    /// Maintainers; the first one is authoritative.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<Maintainer>,

    /// Source repository URL, or empty when unknown.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repository_url: String,

    /// Published container image URL, or empty when not published.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,
}

impl DriverEntry {
    /// Create an entry with no display name, features, maintainers or URLs.
    pub fn new(language: impl Into<String>, status: Status) -> Self {
        Self {
            language: language.into(),
            name: String::new(),
            status,
            features: Vec::new(),
            maintainers: Vec::new(),
            repository_url: String::new(),
            image_url: String::new(),
        }
    }

    /// Name shown in reports.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.language
        } else {
            &self.name
        }
    }

    /// Whether the driver advertises `feature`.
    pub fn supports(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// The authoritative maintainer, if any is listed.
    pub fn maintainer(&self) -> Option<&Maintainer> {
        self.maintainers.first()
    }

    /// Whether the driver is mature enough to be listed as supported.
    pub fn is_supported(&self) -> bool {
        self.status >= Status::MIN_SUPPORTED
    }
}
