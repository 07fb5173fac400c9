//! Container registry probing.
//!
//! A probe answers one question: is `<image>:latest` published? Any
//! failure along the way reads as "no"; transient errors and missing
//! images are not told apart.

pub mod auth;

pub use auth::BearerChallenge;

use anyhow::{bail, Context, Result};
use reqwest::blocking::Response;
use reqwest::header::{ACCEPT, AUTHORIZATION, WWW_AUTHENTICATE};
use reqwest::StatusCode;

use crate::http::HttpFetcher;

/// Tag probed for every image.
pub const PROBE_TAG: &str = "latest";

/// Manifest media types accepted from the registry.
const MANIFEST_ACCEPT: &str = "application/vnd.docker.distribution.manifest.v2+json, \
     application/vnd.docker.distribution.manifest.list.v2+json, \
     application/vnd.oci.image.manifest.v1+json, \
     application/vnd.oci.image.index.v1+json, \
     application/vnd.docker.distribution.manifest.v1+prettyjws";

/// Checks whether a container image is published.
///
/// Implementations are shared across probe workers, hence `Sync`.
pub trait ImageProber: Sync {
    /// Return true if `image` has a retrievable, non-empty `latest` manifest.
    fn probe(&self, image: &str) -> bool;
}

/// Probes a registry speaking the Docker registry v2 protocol.
pub struct RegistryProber {
    fetcher: HttpFetcher,
    registry_url: String,
}

impl RegistryProber {
    /// Create a prober for the registry at `registry_url`.
    pub fn new(registry_url: &str, fetcher: HttpFetcher) -> Self {
        Self {
            fetcher,
            registry_url: registry_url.trim_end_matches('/').to_string(),
        }
    }

    /// Manifest endpoint for `image` at `tag`.
    pub fn manifest_url(&self, image: &str, tag: &str) -> String {
        format!("{}/v2/{}/manifests/{}", self.registry_url, image, tag)
    }

    /// Fetch the manifest for `image` at `tag`, answering a token challenge
    /// if the registry issues one.
    pub fn manifest(&self, image: &str, tag: &str) -> Result<serde_json::Value> {
        let url = self.manifest_url(image, tag);
        let mut response = self.request(&url, None)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            let challenge = response
                .headers()
                .get(WWW_AUTHENTICATE)
                .and_then(|v| v.to_str().ok())
                .and_then(BearerChallenge::parse)
                .context("Registry returned 401 without a Bearer challenge")?;
            let token = challenge.fetch_token(self.fetcher.client())?;
            response = self.request(&url, Some(&token))?;
        }

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        let manifest: serde_json::Value = response
            .json()
            .with_context(|| format!("Malformed manifest at {}", url))?;

        match manifest.as_object() {
            Some(fields) if !fields.is_empty() => Ok(manifest),
            _ => bail!("Empty manifest at {}", url),
        }
    }

    fn request(&self, url: &str, token: Option<&str>) -> Result<Response> {
        let mut request = self.fetcher.client().get(url).header(ACCEPT, MANIFEST_ACCEPT);

        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        request
            .send()
            .with_context(|| format!("Request to {} failed", url))
    }
}

impl ImageProber for RegistryProber {
    fn probe(&self, image: &str) -> bool {
        match self.manifest(image, PROBE_TAG) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("{} not available: {:#}", image, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    const MANIFEST: &str = r#"{
        "schemaVersion": 2,
        "mediaType": "application/vnd.docker.distribution.manifest.v2+json",
        "config": {"digest": "sha256:abc"},
        "layers": []
    }"#;

    fn prober_for(server: &MockServer) -> RegistryProber {
        RegistryProber::new(&server.base_url(), HttpFetcher::new().unwrap())
    }

    #[test]
    fn manifest_url_uses_v2_layout() {
        let prober = RegistryProber::new("https://registry.example/", HttpFetcher::new().unwrap());
        assert_eq!(
            prober.manifest_url("bblfsh/go-driver", "latest"),
            "https://registry.example/v2/bblfsh/go-driver/manifests/latest"
        );
    }

    #[test]
    fn published_image_probes_true() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v2/bblfsh/go-driver/manifests/latest");
            then.status(200)
                .header("content-type", "application/json")
                .body(MANIFEST);
        });

        assert!(prober_for(&server).probe("bblfsh/go-driver"));
        mock.assert();
    }

    #[test]
    fn missing_image_probes_false() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/bblfsh/cobol-driver/manifests/latest");
            then.status(404)
                .body(r#"{"errors":[{"code":"MANIFEST_UNKNOWN"}]}"#);
        });

        assert!(!prober_for(&server).probe("bblfsh/cobol-driver"));
    }

    #[test]
    fn server_error_probes_false() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/bblfsh/go-driver/manifests/latest");
            then.status(503);
        });

        assert!(!prober_for(&server).probe("bblfsh/go-driver"));
    }

    #[test]
    fn empty_manifest_probes_false() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/bblfsh/go-driver/manifests/latest");
            then.status(200).body("{}");
        });

        assert!(!prober_for(&server).probe("bblfsh/go-driver"));
    }

    #[test]
    fn malformed_manifest_probes_false() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/bblfsh/go-driver/manifests/latest");
            then.status(200).body("<html>not a manifest</html>");
        });

        assert!(!prober_for(&server).probe("bblfsh/go-driver"));
    }

    #[test]
    fn unreachable_registry_probes_false() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(2)).unwrap();
        let prober = RegistryProber::new("http://127.0.0.1:9", fetcher);
        assert!(!prober.probe("bblfsh/go-driver"));
    }

    #[test]
    fn answers_token_challenge() {
        let server = MockServer::start();
        let challenge = format!(
            r#"Bearer realm="{}",service="registry.test",scope="repository:bblfsh/go-driver:pull""#,
            server.url("/token")
        );

        let denied = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/bblfsh/go-driver/manifests/latest")
                .header_missing("authorization");
            then.status(401).header("www-authenticate", challenge);
        });
        let token = server.mock(|when, then| {
            when.method(GET).path("/token").query_param("service", "registry.test");
            then.status(200).body(r#"{"token": "t0ken"}"#);
        });
        let granted = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/bblfsh/go-driver/manifests/latest")
                .header("authorization", "Bearer t0ken");
            then.status(200).body(MANIFEST);
        });

        assert!(prober_for(&server).probe("bblfsh/go-driver"));
        denied.assert();
        token.assert();
        granted.assert();
    }

    #[test]
    fn unauthorized_without_challenge_probes_false() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/bblfsh/go-driver/manifests/latest");
            then.status(401);
        });

        assert!(!prober_for(&server).probe("bblfsh/go-driver"));
    }
}
