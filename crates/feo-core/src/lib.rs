//! # feo-core: Foundational Types for the FEO Config Assistant
//!
//! Shared vocabulary for the workspace. Every other `feo-*` crate depends on
//! this one; it depends on nothing internal.
//!
//! ## Contents
//!
//! - [`SchemaPath`]: segmented path used to walk a schema document.
//! - [`TemplateKind`], [`MigrationType`], [`ExampleKind`]: closed sets of
//!   request kinds. Migration and example kinds parse from their wire names
//!   via `FromStr`.
//! - [`TemplateRequest`] / [`TemplateFields`]: caller input to template
//!   synthesis.
//! - [`FeoError`] / [`FetchError`]: the error hierarchy.
//! - [`title_case_identifier`]: the bundle/app identifier naming transform.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `feo-*` crates (leaf of the DAG).
//! - No I/O, no network, no `unwrap()` outside tests.

pub mod error;
pub mod naming;
pub mod path;
pub mod request;

pub use error::{FeoError, FetchError};
pub use naming::title_case_identifier;
pub use path::SchemaPath;
pub use request::{ExampleKind, MigrationType, Route, TemplateFields, TemplateKind, TemplateRequest};
