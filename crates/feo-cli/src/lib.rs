//! # feo-cli: the `feo` Command-Line Assistant
//!
//! Thin routing over the engine crates. Each subcommand module exposes an
//! `XArgs` struct and a `run_x` function returning a [`ToolReport`]; `main`
//! prints the report and maps it to an exit code.
//!
//! ## Subcommands
//!
//! - `feo schema`: summary of the cached CRD schema.
//! - `feo migration-template`: fragment and steps for one migration.
//! - `feo setup-template`: a complete `deploy/frontend.yaml`.
//! - `feo validate`: schema validation with advisories.
//! - `feo field-recommendations`: required fields, defaults, and examples.
//! - `feo service-tiles-sections`: service tile placement.
//! - `feo examples`: quick-reference snippets.
//!
//! ```bash
//! feo migration-template learning-resources insights navigation
//! feo setup-template learning-resources insights --title "Learning Resources"
//! feo --schema-file ./frontend-crd.schema.json validate deploy/frontend.yaml
//! ```

pub mod examples;
pub mod fields;
pub mod report;
pub mod schema;
pub mod sections;
pub mod template;
pub mod validate;

use std::path::PathBuf;

use feo_schema::{ConfigError, SchemaSourceConfig};
use url::Url;

pub use report::ToolReport;

/// Environment configuration with command-line overrides applied.
///
/// `--schema-file` wins over `--schema-url`, which wins over the
/// environment.
pub fn source_config(
    schema_url: Option<&str>,
    schema_file: Option<PathBuf>,
) -> Result<SchemaSourceConfig, ConfigError> {
    let mut config = SchemaSourceConfig::from_env()?;
    if let Some(raw) = schema_url {
        config.schema_url = Url::parse(raw)
            .map_err(|e| ConfigError::InvalidUrl("--schema-url".to_string(), e.to_string()))?;
        config.schema_file = None;
    }
    if let Some(path) = schema_file {
        config.schema_file = Some(path);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_file_override_is_kept() {
        let cfg = source_config(None, Some(PathBuf::from("/tmp/schema.json"))).unwrap();
        assert_eq!(cfg.schema_file, Some(PathBuf::from("/tmp/schema.json")));
    }

    #[test]
    fn schema_url_override_replaces_url() {
        let cfg = source_config(Some("https://schemas.test/frontend.json"), None).unwrap();
        assert_eq!(cfg.schema_url.as_str(), "https://schemas.test/frontend.json");
        assert!(cfg.schema_file.is_none());
    }

    #[test]
    fn invalid_url_override_is_rejected() {
        let err = source_config(Some("not a url"), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(flag, _) if flag == "--schema-url"));
    }
}
