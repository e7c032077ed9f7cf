//! # Bundle Recommendations
//!
//! Suggested values for navigation and service-tile fields, read from the
//! `default` keywords of the cached schema. Each lookup falls back to a fixed
//! value when the schema is absent or does not declare a default, so every
//! function here is total.
//!
//! The bundle argument does not change the result today; it is recorded in
//! the trace so per-bundle overrides can be added without touching callers.

use std::sync::Arc;

use feo_core::{title_case_identifier, SchemaPath};
use feo_schema::{CacheEntry, Navigator, SchemaNode, SchemaStore};

/// Navigation position used when the schema declares none.
pub const DEFAULT_POSITION: i64 = 800;
/// Service tile section used when the schema declares none.
pub const DEFAULT_SECTION: &str = "insights";
/// Service tile group used when the schema declares none.
pub const DEFAULT_GROUP: &str = "platform";
/// Service tile icon used when the schema declares none.
pub const DEFAULT_ICON: &str = "Application";

/// Where a bundle's service tile belongs in the Services dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSection {
    pub section: String,
    pub group: String,
}

/// Reads recommendations from one schema snapshot.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    entry: Option<Arc<CacheEntry>>,
}

impl Recommender {
    pub fn new(entry: Option<Arc<CacheEntry>>) -> Self {
        Self { entry }
    }

    /// Snapshot whatever `store` currently holds.
    pub fn from_store(store: &SchemaStore) -> Self {
        Self::new(store.current())
    }

    /// Navigation position for a new bundle segment.
    pub fn position(&self, bundle: &str) -> i64 {
        let position = self.item_default(&["bundleSegments"], "position", |node| node.default_i64());
        tracing::trace!(bundle, from_schema = position.is_some(), "position recommendation");
        position.unwrap_or(DEFAULT_POSITION)
    }

    /// Section and group for a service tile. Each falls back independently.
    pub fn service_section(&self, bundle: &str) -> ServiceSection {
        let section = self.item_default_str(&["serviceTiles"], "section");
        let group = self.item_default_str(&["serviceTiles"], "group");
        tracing::trace!(
            bundle,
            section_from_schema = section.is_some(),
            group_from_schema = group.is_some(),
            "service section recommendation"
        );
        ServiceSection {
            section: section.unwrap_or_else(|| DEFAULT_SECTION.to_string()),
            group: group.unwrap_or_else(|| DEFAULT_GROUP.to_string()),
        }
    }

    /// Icon for a service tile.
    pub fn icon(&self, bundle: &str) -> String {
        let icon = self.item_default_str(&["serviceTiles"], "icon");
        tracing::trace!(bundle, from_schema = icon.is_some(), "icon recommendation");
        icon.unwrap_or_else(|| DEFAULT_ICON.to_string())
    }

    /// Product label for navigation items. Without a schema default this is
    /// the bundle identifier title-cased (`service-now` → `Service Now`).
    pub fn product_name(&self, bundle: &str) -> String {
        let product = self.item_default_str(&["bundleSegments", "navItems"], "product");
        tracing::trace!(bundle, from_schema = product.is_some(), "product recommendation");
        product.unwrap_or_else(|| title_case_identifier(bundle))
    }

    /// Walk `frontendSpec.<arrays[0]>.items.<arrays[1]>.items...` and read
    /// `property` of the innermost item schema.
    fn item_default<T>(
        &self,
        arrays: &[&str],
        property: &str,
        read: impl Fn(SchemaNode<'_>) -> Option<T>,
    ) -> Option<T> {
        let entry = self.entry.as_ref()?;
        let nav = Navigator::new(entry.document());
        let mut node = nav.resolve(&SchemaPath::frontend_spec())?;
        for array in arrays {
            node = node.property(array)?.items()?;
        }
        read(node.property(property)?)
    }

    fn item_default_str(&self, arrays: &[&str], property: &str) -> Option<String> {
        self.item_default(arrays, property, |node| {
            node.default_str()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
    }
}
