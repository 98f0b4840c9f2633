//! Version service - Latest published versions from npm and PyPI
//!
//! Lookups are best effort: any failure (transport, HTTP status, malformed body,
//! missing field) yields the caller's fallback. Nothing is retried.

use crate::config::RegistryConfig;
use crate::models::Ecosystem;
use crate::Result;
use reqwest::{header, Client, StatusCode, Url};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
enum ResolveError {
    #[error("invalid registry URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("registry returned HTTP {0}")]
    Status(StatusCode),

    #[error("response has no version field")]
    MissingVersion,
}

type CacheKey = (Ecosystem, String);

#[derive(Debug)]
struct CachedVersion {
    version: String,
    fetched_at: Instant,
}

/// Process-wide memo of successful lookups
#[derive(Debug, Clone)]
struct VersionCache {
    ttl: Duration,
    entries: Arc<RwLock<HashMap<CacheKey, CachedVersion>>>,
}

impl VersionCache {
    fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn get(&self, ecosystem: Ecosystem, package: &str) -> Option<String> {
        let entries = self.entries.read().await;
        entries
            .get(&(ecosystem, package.to_string()))
            .filter(|cached| cached.fetched_at.elapsed() < self.ttl)
            .map(|cached| cached.version.clone())
    }

    async fn insert(&self, ecosystem: Ecosystem, package: &str, version: &str) {
        let mut entries = self.entries.write().await;
        entries.insert(
            (ecosystem, package.to_string()),
            CachedVersion {
                version: version.to_string(),
                fetched_at: Instant::now(),
            },
        );
    }
}

/// Resolves the latest published version of a package
#[derive(Debug, Clone)]
pub struct VersionResolver {
    client: Client,
    npm_url: String,
    pypi_url: String,
    cache: Option<VersionCache>,
}

impl VersionResolver {
    /// Create a resolver with its own HTTP client honoring the configured timeout
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let client = build_client(config.timeout())?;
        Ok(Self::with_client(client, config))
    }

    /// Create a resolver on top of an existing client
    pub fn with_client(client: Client, config: &RegistryConfig) -> Self {
        Self {
            client,
            npm_url: config.npm_url.clone(),
            pypi_url: config.pypi_url.clone(),
            cache: config.cache_ttl().map(VersionCache::new),
        }
    }

    /// Latest version of `package`, or `fallback` when it cannot be determined
    pub async fn resolve(&self, ecosystem: Ecosystem, package: &str, fallback: &str) -> String {
        if let Some(cache) = &self.cache {
            if let Some(version) = cache.get(ecosystem, package).await {
                return version;
            }
        }

        match self.fetch_latest(ecosystem, package).await {
            Ok(version) => {
                if let Some(cache) = &self.cache {
                    cache.insert(ecosystem, package, &version).await;
                }
                version
            }
            Err(e) => {
                tracing::debug!(
                    ecosystem = ecosystem.name(),
                    package,
                    fallback,
                    error = %e,
                    "registry lookup failed, using fallback version"
                );
                fallback.to_string()
            }
        }
    }

    async fn fetch_latest(
        &self,
        ecosystem: Ecosystem,
        package: &str,
    ) -> std::result::Result<String, ResolveError> {
        let url = self.latest_url(ecosystem, package)?;
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ResolveError::Status(response.status()));
        }

        let body: Value = response.json().await?;
        version_field(ecosystem, &body)
            .filter(|version| !version.is_empty())
            .map(str::to_string)
            .ok_or(ResolveError::MissingVersion)
    }

    /// Registry resource describing the latest release
    ///
    /// - npm: `{npm_url}/{name}/latest` (scoped names are percent-encoded)
    /// - PyPI: `{pypi_url}/{name}/json`
    fn latest_url(
        &self,
        ecosystem: Ecosystem,
        package: &str,
    ) -> std::result::Result<Url, ResolveError> {
        let (base, tail) = match ecosystem {
            Ecosystem::Npm => (&self.npm_url, "latest"),
            Ecosystem::Pypi => (&self.pypi_url, "json"),
        };

        let mut url = Url::parse(base).map_err(|e| ResolveError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ResolveError::InvalidUrl(base.clone()))?
            .pop_if_empty()
            .push(package)
            .push(tail);
        Ok(url)
    }
}

fn version_field(ecosystem: Ecosystem, body: &Value) -> Option<&str> {
    let version = match ecosystem {
        Ecosystem::Npm => body.get("version"),
        Ecosystem::Pypi => body.get("info").and_then(|info| info.get("version")),
    };
    version.and_then(Value::as_str)
}

/// HTTP client shared by registry lookups and issue filing
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("harnessgg-site/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_upstream, test_client};
    use axum::extract::{Path, State};
    use axum::http::StatusCode as HttpStatus;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn registry_config(base: &str) -> RegistryConfig {
        RegistryConfig {
            npm_url: format!("{}/npm", base),
            pypi_url: format!("{}/pypi", base),
            ..RegistryConfig::default()
        }
    }

    async fn npm_latest(Path(name): Path<String>) -> impl IntoResponse {
        match name.as_str() {
            "@harnessgg/electron" => Json(json!({"name": name, "version": "0.9.1"})).into_response(),
            "broken" => (HttpStatus::OK, "{not json").into_response(),
            "no-version" => Json(json!({"name": name})).into_response(),
            _ => (HttpStatus::NOT_FOUND, "Not Found").into_response(),
        }
    }

    async fn pypi_json(Path(name): Path<String>) -> impl IntoResponse {
        match name.as_str() {
            "harnessgg-kdenlive" => Json(json!({"info": {"version": "0.5.2"}})).into_response(),
            _ => (HttpStatus::NOT_FOUND, Json(json!({"message": "Not Found"}))).into_response(),
        }
    }

    fn registry_routes() -> Router {
        Router::new()
            .route("/npm/:name/latest", get(npm_latest))
            .route("/pypi/:name/json", get(pypi_json))
    }

    #[tokio::test]
    async fn test_npm_scoped_package() {
        let base = spawn_upstream(registry_routes()).await;
        let resolver = VersionResolver::with_client(test_client(), &registry_config(&base));

        let version = resolver
            .resolve(Ecosystem::Npm, "@harnessgg/electron", "0.1.0")
            .await;
        assert_eq!(version, "0.9.1");
    }

    #[tokio::test]
    async fn test_pypi_package() {
        let base = spawn_upstream(registry_routes()).await;
        let resolver = VersionResolver::with_client(test_client(), &registry_config(&base));

        let version = resolver
            .resolve(Ecosystem::Pypi, "harnessgg-kdenlive", "0.4.0")
            .await;
        assert_eq!(version, "0.5.2");
    }

    #[tokio::test]
    async fn test_not_found_uses_fallback() {
        let base = spawn_upstream(registry_routes()).await;
        let resolver = VersionResolver::with_client(test_client(), &registry_config(&base));

        assert_eq!(resolver.resolve(Ecosystem::Npm, "missing", "1.0.0").await, "1.0.0");
        assert_eq!(resolver.resolve(Ecosystem::Pypi, "missing", "2.0.0").await, "2.0.0");
    }

    #[tokio::test]
    async fn test_malformed_body_uses_fallback() {
        let base = spawn_upstream(registry_routes()).await;
        let resolver = VersionResolver::with_client(test_client(), &registry_config(&base));

        assert_eq!(resolver.resolve(Ecosystem::Npm, "broken", "0.3.0").await, "0.3.0");
        assert_eq!(resolver.resolve(Ecosystem::Npm, "no-version", "0.3.0").await, "0.3.0");
    }

    #[tokio::test]
    async fn test_unreachable_registry_uses_fallback() {
        let config = registry_config("http://127.0.0.1:9");
        let resolver = VersionResolver::with_client(test_client(), &config);

        assert_eq!(resolver.resolve(Ecosystem::Pypi, "harnessgg-gimp", "0.2.1").await, "0.2.1");
    }

    #[tokio::test]
    async fn test_invalid_base_url_uses_fallback() {
        let config = RegistryConfig {
            npm_url: "not a url".to_string(),
            ..RegistryConfig::default()
        };
        let resolver = VersionResolver::with_client(test_client(), &config);

        assert_eq!(resolver.resolve(Ecosystem::Npm, "anything", "0.0.1").await, "0.0.1");
    }

    #[tokio::test]
    async fn test_cache_reuses_successful_lookups_only() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route(
                "/npm/:name/latest",
                get(|State(hits): State<Arc<AtomicUsize>>, Path(name): Path<String>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    if name == "ok" {
                        Json(json!({"version": "3.0.0"})).into_response()
                    } else {
                        HttpStatus::INTERNAL_SERVER_ERROR.into_response()
                    }
                }),
            )
            .with_state(hits.clone());
        let base = spawn_upstream(app).await;

        let config = RegistryConfig {
            cache_ttl_secs: 300,
            ..registry_config(&base)
        };
        let resolver = VersionResolver::with_client(test_client(), &config);

        assert_eq!(resolver.resolve(Ecosystem::Npm, "ok", "1.0.0").await, "3.0.0");
        assert_eq!(resolver.resolve(Ecosystem::Npm, "ok", "1.0.0").await, "3.0.0");
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        assert_eq!(resolver.resolve(Ecosystem::Npm, "down", "1.0.0").await, "1.0.0");
        assert_eq!(resolver.resolve(Ecosystem::Npm, "down", "1.0.0").await, "1.0.0");
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_cache_entries_expire_after_ttl() {
        let expired = VersionCache::new(Duration::ZERO);
        expired.insert(Ecosystem::Pypi, "harnessgg-gimp", "0.3.0").await;
        assert_eq!(expired.get(Ecosystem::Pypi, "harnessgg-gimp").await, None);

        let fresh = VersionCache::new(Duration::from_secs(300));
        fresh.insert(Ecosystem::Pypi, "harnessgg-gimp", "0.3.0").await;
        assert_eq!(
            fresh.get(Ecosystem::Pypi, "harnessgg-gimp").await.as_deref(),
            Some("0.3.0")
        );
        assert_eq!(fresh.get(Ecosystem::Npm, "harnessgg-gimp").await, None);
    }

    #[test]
    fn test_latest_url_encoding() {
        let resolver =
            VersionResolver::with_client(test_client(), &RegistryConfig::default());

        let npm = resolver
            .latest_url(Ecosystem::Npm, "@harnessgg/electron")
            .unwrap();
        assert_eq!(
            npm.as_str(),
            "https://registry.npmjs.org/@harnessgg%2Felectron/latest"
        );

        let pypi = resolver
            .latest_url(Ecosystem::Pypi, "harnessgg-blender")
            .unwrap();
        assert_eq!(pypi.as_str(), "https://pypi.org/pypi/harnessgg-blender/json");
    }
}
