use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "website/site.toml";
pub const CONFIG_ENV: &str = "ETALASE_CONFIG";

/// Site-wide settings read from `website/site.toml`. Every key is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    /// Canonical base URL, no trailing slash.
    pub site_url: String,
    /// Local path or `http(s)://` URL of the catalog JSON.
    pub catalog: String,
    pub page_size: usize,
    pub whatsapp_number: String,
    pub currency_prefix: String,
    pub currency_code: String,
    pub thousands_separator: String,
    pub fetch_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "Marketplace Template".to_string(),
            site_url: "http://localhost:8000".to_string(),
            catalog: "website/static/data/templates.json".to_string(),
            page_size: 6,
            whatsapp_number: "6281234567890".to_string(),
            currency_prefix: "Rp ".to_string(),
            currency_code: "IDR".to_string(),
            thousands_separator: ".".to_string(),
            fetch_timeout_secs: 10,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "cannot read {}: {}", path.display(), e),
            ConfigError::Parse(path, e) => write!(f, "invalid {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl SiteConfig {
    pub fn from_toml_str(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        let cfg: SiteConfig =
            toml::from_str(raw).map_err(|e| ConfigError::Parse(origin.to_path_buf(), e))?;
        Ok(cfg.normalized())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&raw, path)
    }

    /// Load from `$ETALASE_CONFIG` or `website/site.toml`; any failure falls
    /// back to defaults so the storefront still starts.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return SiteConfig::default();
        }

        match Self::from_file(&path) {
            Ok(cfg) => {
                info!("Loaded site config from {}", path.display());
                cfg
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                SiteConfig::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        while self.site_url.ends_with('/') {
            self.site_url.pop();
        }
        self
    }

    pub fn canonical(&self, path: &str) -> String {
        format!("{}{}", self.site_url, path)
    }
}
