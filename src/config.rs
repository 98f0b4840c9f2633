//! Site configuration
//!
//! Loaded from TOML. Lookup order:
//! 1. An explicit path (`--config`), which must exist
//! 2. `./harnessgg-site.toml`
//! 3. `<config dir>/harnessgg-site/config.toml`
//! 4. Built-in defaults
//!
//! The issue tracker token is only ever taken from `GITHUB_TOKEN`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const LOCAL_CONFIG_FILE: &str = "harnessgg-site.toml";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file '{0}': {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file '{0}': {1}")]
    Parse(PathBuf, toml::de::Error),
}

/// Registry lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// npm registry base URL
    pub npm_url: String,

    /// PyPI JSON API base URL
    pub pypi_url: String,

    /// Network timeout for a single lookup
    pub timeout_secs: u64,

    /// How long successful lookups are reused (0 disables the cache)
    pub cache_ttl_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            npm_url: "https://registry.npmjs.org".to_string(),
            pypi_url: "https://pypi.org/pypi".to_string(),
            timeout_secs: 10,
            cache_ttl_secs: 0,
        }
    }
}

impl RegistryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        (self.cache_ttl_secs > 0).then(|| Duration::from_secs(self.cache_ttl_secs))
    }
}

/// Issue filing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuesConfig {
    pub github_api_url: String,

    #[serde(skip)]
    pub github_token: Option<String>,
}

impl Default for IssuesConfig {
    fn default() -> Self {
        Self {
            github_api_url: "https://api.github.com".to_string(),
            github_token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public origin used in every absolute link (no trailing slash)
    pub site_url: String,

    pub host: String,
    pub port: u16,

    /// Directory of prebuilt HTML pages served for non-agent requests
    pub pages_dir: PathBuf,

    pub registry: RegistryConfig,
    pub issues: IssuesConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: "https://harness.gg".to_string(),
            host: "127.0.0.1".to_string(),
            port: 4321,
            pages_dir: PathBuf::from("dist"),
            registry: RegistryConfig::default(),
            issues: IssuesConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration and apply environment overrides
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match Self::locate(explicit)? {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.github_token_from_env();
        Ok(config)
    }

    /// Parse a config file without consulting the environment
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        let config: SiteConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        Ok(config.normalized())
    }

    fn locate(explicit: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Ok(Some(local));
        }

        Ok(Self::user_config_path().filter(|path| path.exists()))
    }

    /// `<config dir>/harnessgg-site/config.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("harnessgg-site").join("config.toml"))
    }

    fn github_token_from_env(&mut self) {
        self.issues.github_token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty());
    }

    fn normalized(mut self) -> Self {
        trim_trailing_slashes(&mut self.site_url);
        trim_trailing_slashes(&mut self.registry.npm_url);
        trim_trailing_slashes(&mut self.registry.pypi_url);
        trim_trailing_slashes(&mut self.issues.github_api_url);
        self
    }

    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into();
        trim_trailing_slashes(&mut self.site_url);
        self
    }

    pub fn with_github_token(mut self, token: impl Into<String>) -> Self {
        self.issues.github_token = Some(token.into());
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn trim_trailing_slashes(url: &mut String) {
    let trimmed_len = url.trim_end_matches('/').len();
    url.truncate(trimmed_len);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.site_url, "https://harness.gg");
        assert_eq!(config.registry.npm_url, "https://registry.npmjs.org");
        assert!(config.registry.cache_ttl().is_none());
        assert_eq!(config.bind_address(), "127.0.0.1:4321");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("site.toml");
        std::fs::write(
            &path,
            "site_url = \"https://staging.harness.gg/\"\nport = 8080\n\n[registry]\ncache_ttl_secs = 60\n",
        )
        .unwrap();

        let config = SiteConfig::from_file(&path).unwrap();
        assert_eq!(config.site_url, "https://staging.harness.gg");
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.registry.pypi_url, "https://pypi.org/pypi");
        assert_eq!(config.registry.cache_ttl(), Some(Duration::from_secs(60)));
        assert_eq!(config.issues.github_api_url, "https://api.github.com");
    }

    #[test]
    fn test_token_never_read_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("site.toml");
        std::fs::write(&path, "[issues]\ngithub_token = \"secret\"\n").unwrap();

        let config = SiteConfig::from_file(&path).unwrap();
        assert!(config.issues.github_token.is_none());

        let rendered = toml::to_string_pretty(&config.with_github_token("secret")).unwrap();
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_with_site_url_trims_trailing_slashes() {
        let config = SiteConfig::default().with_site_url("https://preview.harness.gg//");
        assert_eq!(config.site_url, "https://preview.harness.gg");
    }

    #[test]
    fn test_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let err = SiteConfig::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("site.toml");
        std::fs::write(&path, "port = \"not a number\"").unwrap();

        let err = SiteConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_, _)));
        assert!(err.to_string().contains("site.toml"));
    }
}
