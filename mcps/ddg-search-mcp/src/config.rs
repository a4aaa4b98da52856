//! Configuration loading for ddg-search-mcp
//!
//! Configuration is loaded from:
//! 1. An explicit path (the `--config` flag)
//! 2. Environment variable DDG_SEARCH_CONFIG_PATH
//! 3. ~/.binks/ddg-search.toml
//! 4. Default values
//!
//! `PORT`, `HOST` and `DDG_SEARCH_ENDPOINT` override the file.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Listener configuration (HTTP transport)
    #[serde(default)]
    pub server: ServerConfig,
    /// Outbound search configuration
    #[serde(default)]
    pub search: SearchConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// DuckDuckGo request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// HTML results endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Hard timeout for the outbound request
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Browser User-Agent sent to DuckDuckGo
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_endpoint() -> String {
    "https://html.duckduckgo.com/html/".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.9".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply env overrides
    pub fn load(path_override: Option<&Path>) -> Result<Self> {
        let config_path = path_override
            .map(Path::to_path_buf)
            .or_else(Self::find_config_path);

        let mut config = match config_path {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::from_file(&path)?
            }
            Some(path) => {
                tracing::info!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Ok(endpoint) = std::env::var("DDG_SEARCH_ENDPOINT") {
            self.search.endpoint = endpoint;
        }
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<()> {
        let endpoint = url::Url::parse(&self.search.endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            bail!(
                "search.endpoint must be an http(s) URL, got {}",
                self.search.endpoint
            );
        }
        if self.search.timeout_seconds == 0 {
            bail!("search.timeout_seconds must be greater than zero");
        }
        Ok(())
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("DDG_SEARCH_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.binks/ddg-search.toml
        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home).join(".binks").join("ddg-search.toml");
            return Some(path);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.search.timeout_seconds, 10);
        assert_eq!(config.search.endpoint, "https://html.duckduckgo.com/html/");
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [search]
            timeout_seconds = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.search.timeout_seconds, 3);
        assert!(config.search.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.search.endpoint = "ftp://example.com/".into();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.search.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
