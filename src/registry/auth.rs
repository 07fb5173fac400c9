//! Anonymous token authentication for the registry v2 API.
//!
//! Public images on Docker Hub still answer an unauthenticated manifest
//! request with `401 Unauthorized` and a challenge such as:
//!
//! ```text
//! WWW-Authenticate: Bearer realm="https://auth.docker.io/token",service="registry.docker.io",scope="repository:bblfsh/go-driver:pull"
//! ```
//!
//! The client fetches an anonymous pull token from the realm and repeats
//! the request with it.

use anyhow::{bail, Context, Result};
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use std::sync::LazyLock;

/// `key="value"` pairs inside a challenge.
static PARAM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_]+)="([^"]*)""#).expect("PARAM_REGEX must compile")
});

/// A parsed `Bearer` challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerChallenge {
    /// Token endpoint.
    pub realm: String,
    /// Service the token is issued for.
    pub service: Option<String>,
    /// Requested access scope.
    pub scope: Option<String>,
}

impl BearerChallenge {
    /// Parse a `WWW-Authenticate` header value.
    ///
    /// Returns `None` for non-Bearer schemes or when no realm is given.
    pub fn parse(header: &str) -> Option<Self> {
        let (scheme, params) = header.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }

        let mut realm = None;
        let mut service = None;
        let mut scope = None;
        for caps in PARAM_REGEX.captures_iter(params) {
            let value = caps[2].to_string();
            match &caps[1] {
                "realm" => realm = Some(value),
                "service" => service = Some(value),
                "scope" => scope = Some(value),
                _ => {}
            }
        }

        Some(Self {
            realm: realm?,
            service,
            scope,
        })
    }

    /// Request an anonymous token for this challenge.
    pub fn fetch_token(&self, client: &Client) -> Result<String> {
        let mut query = Vec::new();
        if let Some(service) = &self.service {
            query.push(("service", service.as_str()));
        }
        if let Some(scope) = &self.scope {
            query.push(("scope", scope.as_str()));
        }

        let url = Url::parse_with_params(&self.realm, &query)
            .with_context(|| format!("Invalid token realm {}", self.realm))?;
        let response = client
            .get(url)
            .send()
            .with_context(|| format!("Token request to {} failed", self.realm))?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching token from {}", response.status(), self.realm);
        }

        let body: TokenResponse = response.json().context("Failed to parse token response")?;
        match body.token.or(body.access_token) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => bail!("Token response from {} carried no token", self.realm),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: Option<String>,
    access_token: Option<String>,
}
