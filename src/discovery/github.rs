//! Official driver discovery through the GitHub API.
//!
//! Lists the organization's repositories, keeps the ones tagged as
//! Babelfish drivers, and reads each driver's manifest and MAINTAINERS
//! file from the raw content host.

use serde::Deserialize;

use super::maintainers::parse_maintainers;
use super::manifest::DriverManifest;
use super::{sort_catalog, CatalogSource};
use crate::config::ReportConfig;
use crate::driver::DriverEntry;
use crate::error::{LangtableError, Result};
use crate::http::HttpFetcher;

/// Topic every official driver repository carries.
pub const DRIVER_TOPIC: &str = "babelfish-driver";

/// Repositories requested per page.
const PER_PAGE: usize = 100;

/// Repository fields returned by the GitHub API.
#[derive(Debug, Clone, Deserialize)]
struct Repository {
    name: String,
    #[serde(default)]
    html_url: String,
    #[serde(default = "default_branch")]
    default_branch: String,
    #[serde(default)]
    topics: Vec<String>,
}

fn default_branch() -> String {
    "master".to_string()
}

impl Repository {
    fn is_driver(&self) -> bool {
        self.name.ends_with("-driver") && self.topics.iter().any(|t| t == DRIVER_TOPIC)
    }
}

fn catalog_error(err: anyhow::Error) -> LangtableError {
    LangtableError::CatalogUnavailable {
        message: format!("{:#}", err),
    }
}

/// Catalog of official drivers hosted in a GitHub organization.
pub struct GithubCatalog {
    fetcher: HttpFetcher,
    org: String,
    api_url: String,
    raw_url: String,
}

impl GithubCatalog {
    /// Create a catalog for the organization and endpoints in `config`.
    pub fn new(config: &ReportConfig, fetcher: HttpFetcher) -> Self {
        Self {
            fetcher,
            org: config.org.clone(),
            api_url: config.github_api_url.trim_end_matches('/').to_string(),
            raw_url: config.raw_content_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the organization name.
    pub fn org(&self) -> &str {
        &self.org
    }

    fn list_repositories(&self) -> Result<Vec<Repository>> {
        let mut repos = Vec::new();

        for page in 1.. {
            let url = format!(
                "{}/orgs/{}/repos?per_page={}&page={}",
                self.api_url, self.org, PER_PAGE, page
            );
            let batch: Vec<Repository> = self.fetcher.fetch_json(&url).map_err(catalog_error)?;

            let last = batch.len() < PER_PAGE;
            repos.extend(batch);
            if last {
                break;
            }
        }

        Ok(repos)
    }

    fn raw_file_url(&self, repo: &Repository, file: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_url, self.org, repo.name, repo.default_branch, file
        )
    }

    fn load_driver(&self, repo: Repository) -> Result<DriverEntry> {
        let content = self
            .fetcher
            .fetch_text(&self.raw_file_url(&repo, "manifest.toml"))
            .map_err(catalog_error)?;
        let manifest = DriverManifest::parse(&repo.name, &content)?;

        let maintainers = self
            .fetcher
            .fetch_optional(&self.raw_file_url(&repo, "MAINTAINERS"))
            .map_err(catalog_error)?
            .map(|content| parse_maintainers(&content))
            .unwrap_or_default();

        Ok(manifest.into_entry(maintainers, repo.html_url))
    }
}

impl CatalogSource for GithubCatalog {
    fn drivers(&self) -> Result<Vec<DriverEntry>> {
        let repos = self.list_repositories()?;
        tracing::debug!("{} repositories listed in {}", repos.len(), self.org);

        let mut drivers = repos
            .into_iter()
            .filter(Repository::is_driver)
            .map(|repo| self.load_driver(repo))
            .collect::<Result<Vec<_>>>()?;

        sort_catalog(&mut drivers);
        Ok(drivers)
    }
}
