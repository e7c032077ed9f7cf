//! Schema source configuration.
//!
//! Chooses where the schema comes from. Defaults point at the published
//! Frontend Operator CRD schema. Override via environment variables or
//! explicit construction for pinned or offline use.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::source::{FileSchemaSource, HttpSchemaSource, SchemaSource};

/// Published location of the Frontend Operator CRD schema.
pub const DEFAULT_SCHEMA_URL: &str = "https://raw.githubusercontent.com/RedHatInsights/frontend-components/refs/heads/master/packages/config-utils/src/feo/spec/frontend-crd.schema.json";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where to load the schema from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSourceConfig {
    /// Remote schema URL.
    pub schema_url: Url,
    /// Local schema file; takes precedence over `schema_url` when set.
    pub schema_file: Option<PathBuf>,
    /// Request timeout in seconds for the HTTP source.
    pub timeout_secs: u64,
}

impl SchemaSourceConfig {
    /// Configuration pointing at a specific URL with the default timeout.
    pub fn for_url(schema_url: Url) -> Self {
        Self {
            schema_url,
            schema_file: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Configuration for the published schema with the default timeout.
    pub fn published() -> Result<Self, ConfigError> {
        Url::parse(DEFAULT_SCHEMA_URL)
            .map(Self::for_url)
            .map_err(|e| ConfigError::InvalidUrl("DEFAULT_SCHEMA_URL".to_string(), e.to_string()))
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FEO_SCHEMA_URL` (default: [`DEFAULT_SCHEMA_URL`])
    /// - `FEO_SCHEMA_FILE` (optional; read the schema from disk instead)
    /// - `FEO_SCHEMA_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            schema_url: env_url("FEO_SCHEMA_URL", DEFAULT_SCHEMA_URL)?,
            schema_file: std::env::var_os("FEO_SCHEMA_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            timeout_secs: std::env::var("FEO_SCHEMA_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Build the schema source this configuration describes.
    pub fn build_source(&self) -> Result<Arc<dyn SchemaSource>, ConfigError> {
        if let Some(path) = &self.schema_file {
            return Ok(Arc::new(FileSchemaSource::new(path.clone())));
        }
        let http = HttpSchemaSource::new(
            self.schema_url.clone(),
            Duration::from_secs(self.timeout_secs),
        )
        .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Arc::new(http))
    }
}

/// Parse a URL from `var`, falling back to `default` when unset.
pub fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("cannot build HTTP client: {0}")]
    Client(String),
}
