//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Fetch failures carry the source location so reports can name it.
//! - Structural and request-kind errors are expected to be rendered as text
//!   by the template and validation layers, not propagated to the process.

use thiserror::Error;

/// Top-level error type for the FEO config assistant.
#[derive(Error, Debug)]
pub enum FeoError {
    /// The schema could not be retrieved and no cached copy exists.
    #[error("failed to fetch schema: {0}")]
    Fetch(#[from] FetchError),

    /// A candidate document is not well-formed YAML.
    #[error("YAML parse error: {0}")]
    Parse(String),

    /// The schema was fetched but lacks a node the engine depends on.
    #[error("{0}")]
    SchemaStructure(String),

    /// The caller named a template, migration, or example type that does not exist.
    #[error("unknown {category} type: {value}")]
    UnknownRequestKind {
        /// Which family of kinds was being parsed (e.g. `"migration"`).
        category: &'static str,
        /// The unrecognized value as supplied.
        value: String,
    },

    /// No schema document is cached.
    #[error("schema not loaded")]
    SchemaUnavailable,
}

/// Error while retrieving the remote (or local) schema document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connect, timeout).
    #[error("request to {location} failed: {reason}")]
    Transport {
        /// URL that was requested.
        location: String,
        /// Transport-level failure description.
        reason: String,
    },

    /// The server answered with a non-success status.
    #[error("{location} returned HTTP {status}")]
    Status {
        /// URL that was requested.
        location: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not a JSON document.
    #[error("schema at {location} is not valid JSON: {reason}")]
    Decode {
        /// URL or path the body came from.
        location: String,
        /// Decoder error description.
        reason: String,
    },

    /// Reading a local schema file failed.
    #[error("cannot read schema file {location}: {reason}")]
    Io {
        /// Filesystem path.
        location: String,
        /// I/O error description.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_wraps_into_feo_error() {
        let err: FeoError = FetchError::Status {
            location: "https://example.com/schema.json".into(),
            status: 503,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "failed to fetch schema: https://example.com/schema.json returned HTTP 503"
        );
    }

    #[test]
    fn unknown_kind_names_category_and_value() {
        let err = FeoError::UnknownRequestKind {
            category: "migration",
            value: "widgets".into(),
        };
        assert_eq!(err.to_string(), "unknown migration type: widgets");
    }
}
