use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, error, warn};
use rocket::tokio;
use url::Url;

use crate::config::SiteConfig;
use crate::models::template::Template;

/// Where the catalog JSON lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Local(PathBuf),
    Remote(Url),
}

impl CatalogSource {
    /// `http://` and `https://` values are fetched; anything else is a path.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            if let Ok(url) = Url::parse(trimmed) {
                return CatalogSource::Remote(url);
            }
        }
        CatalogSource::Local(PathBuf::from(trimmed))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Local(p) => write!(f, "{}", p.display()),
            CatalogSource::Remote(u) => write!(f, "{}", u),
        }
    }
}

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Http(reqwest::Error),
    Status(reqwest::StatusCode),
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "read failed: {}", e),
            LoadError::Http(e) => write!(f, "request failed: {}", e),
            LoadError::Status(s) => write!(f, "server returned {}", s),
            LoadError::Parse(e) => write!(f, "invalid catalog JSON: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        LoadError::Http(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e)
    }
}

/// The document must be a JSON array. A record that does not fit
/// [`Template`] is skipped with a warning so one bad entry cannot blank the
/// storefront.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Template>, LoadError> {
    let records: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
    let mut catalog = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Template>(record) {
            Ok(t) => catalog.push(t),
            Err(e) => warn!("Skipping catalog record {}: {}", index, e),
        }
    }
    Ok(catalog)
}

/// Fetches the catalog. Shared through Rocket managed state.
pub struct CatalogLoader {
    source: CatalogSource,
    client: reqwest::Client,
}

impl CatalogLoader {
    pub fn new(config: &SiteConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs.max(1)))
            .build()
            .unwrap_or_else(|e| {
                error!("HTTP client setup failed, using defaults: {}", e);
                reqwest::Client::new()
            });
        CatalogLoader {
            source: CatalogSource::parse(&config.catalog),
            client,
        }
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub async fn try_load(&self) -> Result<Vec<Template>, LoadError> {
        let bytes = match &self.source {
            CatalogSource::Local(path) => tokio::fs::read(path).await?,
            CatalogSource::Remote(url) => {
                let resp = self.client.get(url.clone()).send().await?;
                if !resp.status().is_success() {
                    return Err(LoadError::Status(resp.status()));
                }
                resp.bytes().await?.to_vec()
            }
        };
        parse_catalog(&bytes)
    }

    /// Never fails: any load error is logged and reported as an empty
    /// catalog, which the views show as "cannot load".
    pub async fn load_catalog(&self) -> Vec<Template> {
        match self.try_load().await {
            Ok(catalog) => {
                debug!("Loaded {} templates from {}", catalog.len(), self.source);
                catalog
            }
            Err(e) => {
                error!("Error loading templates from {}: {}", self.source, e);
                Vec::new()
            }
        }
    }
}
