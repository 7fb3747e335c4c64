// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "NEWSFEED_CONFIG_PATH";
pub const ENV_API_BASE_URL: &str = "NEWSFEED_API_BASE_URL";
pub const DEFAULT_CONFIG_PATH: &str = "config/newsfeed.toml";

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}
fn default_request_timeout_secs() -> u64 {
    10
}

/// Startup configuration, resolved once and passed down. Call sites never
/// consult the environment themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the article-data service (also hosts the subscription
    /// endpoints the page shell posts to).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let cfg: AppConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config at {}", path.display()))?;
        Ok(cfg)
    }

    /// Load configuration using env var + fallbacks:
    /// 1) $NEWSFEED_CONFIG_PATH
    /// 2) config/newsfeed.toml
    /// 3) built-in defaults
    /// `NEWSFEED_API_BASE_URL` overrides the file value either way.
    pub fn load_default() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("NEWSFEED_CONFIG_PATH points to non-existent path"));
            }
            Self::load_from(&pb)?
        } else {
            let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_p.exists() {
                Self::load_from(&default_p)?
            } else {
                Self::default()
            }
        };

        if let Ok(url) = std::env::var(ENV_API_BASE_URL) {
            if !url.trim().is_empty() {
                cfg.api_base_url = url.trim().to_string();
            }
        }

        Ok(cfg)
    }
}
