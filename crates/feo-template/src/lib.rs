//! # feo-template: frontend.yaml Synthesis
//!
//! Builds `deploy/frontend.yaml` content that matches the cached FEO schema.
//!
//! - [`Recommender`] reads suggested navigation and service-tile values from
//!   schema defaults, with fixed fallbacks.
//! - [`Synthesizer`] plans [`Fragment`]s for a [`feo_core::TemplateRequest`]
//!   and renders them as a full document or a single `spec` section.
//! - [`guidance`] holds the static text that accompanies templates.
//!
//! Nothing here fetches; callers refresh the [`feo_schema::SchemaStore`]
//! first and hand over a snapshot.

pub mod fragment;
pub mod guidance;
pub mod recommend;
pub mod synth;

pub use fragment::Fragment;
pub use recommend::{Recommender, ServiceSection};
pub use synth::{Layout, Plan, Synthesizer, SCHEMA_NOT_LOADED};
