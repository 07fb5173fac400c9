//! Driver manifest parsing.
//!
//! Every driver repository carries a `manifest.toml` at its root. Only the
//! fields the report needs are read; everything else is ignored.

use serde::Deserialize;

use crate::driver::{DriverEntry, Feature, Maintainer, Status};
use crate::error::{LangtableError, Result};

/// The subset of `manifest.toml` used by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DriverManifest {
    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Language key.
    pub language: String,

    /// Development status.
    pub status: Status,

    /// Advertised capabilities.
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl DriverManifest {
    /// Parse a manifest fetched from `repo`.
    pub fn parse(repo: &str, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LangtableError::ManifestParse {
            repo: repo.to_string(),
            message: e.message().to_string(),
        })
    }

    /// Build a catalog entry from this manifest.
    pub fn into_entry(self, maintainers: Vec<Maintainer>, repository_url: String) -> DriverEntry {
        DriverEntry {
            language: self.language,
            name: self.name,
            status: self.status,
            features: self.features,
            maintainers,
            repository_url,
            image_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_manifest() {
        let toml = r#"
name = "Python"
language = "python"
version = "2.3.0"
status = "beta"
features = ["ast", "uast", "roles"]

[documentation]
description = "Python driver"

[runtime]
os = "alpine"
native_version = ["3.6"]
go_version = "1.10"
"#;
        let manifest = DriverManifest::parse("python-driver", toml).unwrap();
        assert_eq!(manifest.name, "Python");
        assert_eq!(manifest.language, "python");
        assert_eq!(manifest.status, Status::Beta);
        assert_eq!(manifest.features, vec![Feature::Ast, Feature::Uast, Feature::Roles]);
    }

    #[test]
    fn name_and_features_are_optional() {
        let toml = r#"
language = "cobol"
status = "planning"
"#;
        let manifest = DriverManifest::parse("cobol-driver", toml).unwrap();
        assert!(manifest.name.is_empty());
        assert!(manifest.features.is_empty());
    }

    #[test]
    fn missing_language_is_an_error() {
        let err = DriverManifest::parse("odd-driver", "status = \"alpha\"").unwrap_err();
        assert!(matches!(
            err,
            LangtableError::ManifestParse { ref repo, .. } if repo == "odd-driver"
        ));
    }

    #[test]
    fn into_entry_keeps_fields_and_leaves_image_empty() {
        let manifest = DriverManifest {
            name: "Go".to_string(),
            language: "go".to_string(),
            status: Status::Stable,
            features: vec![Feature::Ast],
        };
        let entry = manifest.into_entry(
            vec![Maintainer::new("Gopher")],
            "https://github.com/bblfsh/go-driver".to_string(),
        );

        assert_eq!(entry.language, "go");
        assert_eq!(entry.display_name(), "Go");
        assert_eq!(entry.maintainers.len(), 1);
        assert_eq!(entry.repository_url, "https://github.com/bblfsh/go-driver");
        assert!(entry.image_url.is_empty());
    }
}
