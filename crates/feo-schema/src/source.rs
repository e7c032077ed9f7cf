//! # Schema Sources
//!
//! Where the Schema Store gets its document from. A source performs exactly
//! one retrieval attempt per call; retry and caching policy belong to the
//! store, not here.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use feo_core::FetchError;
use serde_json::Value;
use url::Url;

/// A single-attempt provider of the schema document.
#[async_trait]
pub trait SchemaSource: Send + Sync + fmt::Debug {
    /// Human-readable location (URL or path), used in reports and in the
    /// schema reference comment of generated documents.
    fn location(&self) -> &str;

    /// Retrieve and parse the schema document.
    async fn fetch(&self) -> Result<Value, FetchError>;
}

/// Fetches the schema over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSchemaSource {
    http: reqwest::Client,
    url: Url,
    location: String,
}

impl HttpSchemaSource {
    /// Build a source for `url` with the given request timeout.
    pub fn new(url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("feo-config-assistant/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, url))
    }

    /// Build a source around an existing client.
    pub fn with_client(http: reqwest::Client, url: Url) -> Self {
        let location = url.to_string();
        Self { http, url, location }
    }
}

#[async_trait]
impl SchemaSource for HttpSchemaSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<Value, FetchError> {
        let resp = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                location: self.location.clone(),
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            return Err(FetchError::Status {
                location: self.location.clone(),
                status: resp.status().as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| FetchError::Transport {
            location: self.location.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            location: self.location.clone(),
            reason: e.to_string(),
        })
    }
}

/// Reads the schema from a local file, for pinned or offline use.
#[derive(Debug, Clone)]
pub struct FileSchemaSource {
    path: PathBuf,
    location: String,
}

impl FileSchemaSource {
    pub fn new(path: PathBuf) -> Self {
        let location = path.display().to_string();
        Self { path, location }
    }
}

#[async_trait]
impl SchemaSource for FileSchemaSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<Value, FetchError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FetchError::Io {
                location: self.location.clone(),
                reason: e.to_string(),
            })?;
        serde_json::from_str(&content).map_err(|e| FetchError::Decode {
            location: self.location.clone(),
            reason: e.to_string(),
        })
    }
}

/// Serves a fixed in-memory document.
#[derive(Debug, Clone)]
pub struct StaticSchemaSource {
    document: Value,
    location: String,
}

impl StaticSchemaSource {
    pub fn new(document: Value) -> Self {
        Self::with_location(document, "memory://schema")
    }

    pub fn with_location(document: Value, location: impl Into<String>) -> Self {
        Self {
            document,
            location: location.into(),
        }
    }
}

#[async_trait]
impl SchemaSource for StaticSchemaSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<Value, FetchError> {
        Ok(self.document.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn static_source_returns_its_document() {
        let source = StaticSchemaSource::new(json!({"title": "Frontend"}));
        assert_eq!(source.fetch().await.unwrap()["title"], "Frontend");
        assert_eq!(source.location(), "memory://schema");
    }

    #[tokio::test]
    async fn file_source_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frontend-crd.schema.json");
        std::fs::write(&path, r#"{"$defs": {"frontendSpec": {}}}"#).unwrap();

        let source = FileSchemaSource::new(path);
        let doc = source.fetch().await.unwrap();
        assert!(doc["$defs"]["frontendSpec"].is_object());
    }

    #[tokio::test]
    async fn file_source_reports_missing_file() {
        let source = FileSchemaSource::new(PathBuf::from("/nonexistent/feo/schema.json"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn file_source_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FileSchemaSource::new(path).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }), "got {err:?}");
    }
}
