//! # feo-schema: Schema Cache, Navigation & Validation
//!
//! Everything that touches the FEO CRD schema document directly.
//!
//! ## Schema Store (`store`, `source`, `config`)
//!
//! [`SchemaStore`] caches one schema document for an hour, refetching from
//! its [`SchemaSource`] when stale. A failed refresh keeps serving the stale
//! copy; only an empty store surfaces the fetch error.
//!
//! ## Navigation (`node`, `navigator`)
//!
//! [`Navigator`] walks a document along a [`feo_core::SchemaPath`], preferring
//! definitions over properties at each step, and projects defaults, required
//! fields, and examples. [`SchemaNode`] is the typed view it walks over.
//!
//! ## Validation (`validate`)
//!
//! [`ConfigValidator`] parses a candidate YAML document, validates it with
//! the `jsonschema` crate, and returns a [`ValidationOutcome`] with
//! path-qualified violations and advisory checks.
//!
//! ## Crate Policy
//!
//! - Depends only on `feo-core` internally.
//! - The cached document is never mutated; refresh replaces it wholesale.
//! - Nothing here panics on a malformed schema or document.

pub mod config;
pub mod navigator;
pub mod node;
pub mod source;
pub mod store;
pub mod validate;

pub use config::{ConfigError, SchemaSourceConfig, DEFAULT_SCHEMA_URL};
pub use navigator::Navigator;
pub use node::SchemaNode;
pub use source::{FileSchemaSource, HttpSchemaSource, SchemaSource, StaticSchemaSource};
pub use store::{CacheEntry, SchemaStore, FRESHNESS_WINDOW_SECS};
pub use validate::{validate_against, ConfigValidator, ValidationOutcome, Violation};
