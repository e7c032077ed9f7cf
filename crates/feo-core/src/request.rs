//! # Template Requests
//!
//! Caller-owned input to template synthesis, plus the closed sets of
//! request kinds accepted at the dispatch boundary. Migration and example
//! kinds are parsed from their wire names with `FromStr`; anything else is
//! [`FeoError::UnknownRequestKind`].

use std::fmt;
use std::str::FromStr;

use crate::error::FeoError;

/// What a template request should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// A complete `frontend.yaml` document.
    Full,
    /// Only the `module` section.
    Module,
    /// Only the `bundleSegments` section.
    Navigation,
    /// Only the `serviceTiles` section.
    ServiceTiles,
    /// Only the `searchEntries` section.
    SearchEntries,
}

impl TemplateKind {
    /// Wire name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Module => "module",
            Self::Navigation => "navigation",
            Self::ServiceTiles => "serviceTiles",
            Self::SearchEntries => "searchEntries",
        }
    }

    /// The `frontendSpec` property a single-section kind emits, or `None`
    /// for [`TemplateKind::Full`].
    pub fn section_property(self) -> Option<&'static str> {
        match self {
            Self::Full => None,
            Self::Module => Some("module"),
            Self::Navigation => Some("bundleSegments"),
            Self::ServiceTiles => Some("serviceTiles"),
            Self::SearchEntries => Some("searchEntries"),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Migration scenarios offered by the migration-template operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MigrationType {
    /// Move a `fed-modules.json` entry into the `module` section.
    Module,
    /// Move navigation into bundle segments.
    Navigation,
    /// Move `services.json` tiles into `serviceTiles`.
    ServiceTiles,
    /// Replace static search configuration with `searchEntries`.
    Search,
    /// Everything at once.
    Full,
}

impl MigrationType {
    /// Every migration type, in presentation order.
    pub const ALL: [MigrationType; 5] = [
        Self::Module,
        Self::Navigation,
        Self::ServiceTiles,
        Self::Search,
        Self::Full,
    ];

    /// Wire name of the migration type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Navigation => "navigation",
            Self::ServiceTiles => "service-tiles",
            Self::Search => "search",
            Self::Full => "full",
        }
    }

    /// The template a migration of this type needs.
    pub fn template_kind(self) -> TemplateKind {
        match self {
            Self::Module => TemplateKind::Module,
            Self::Navigation => TemplateKind::Navigation,
            Self::ServiceTiles => TemplateKind::ServiceTiles,
            Self::Search => TemplateKind::SearchEntries,
            Self::Full => TemplateKind::Full,
        }
    }
}

impl fmt::Display for MigrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MigrationType {
    type Err = FeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FeoError::UnknownRequestKind {
                category: "migration",
                value: s.to_string(),
            })
    }
}

/// Example families offered by the examples operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExampleKind {
    /// Basic navigation configuration.
    Navigation,
    /// Service tiles in the Services dropdown.
    ServiceTiles,
    /// Search entries for global search.
    Search,
    /// Module and route configuration.
    ModuleConfig,
    /// An application spanning multiple bundles.
    MultiBundle,
    /// Navigation with nested items.
    NestedNavigation,
    /// Full application with every section.
    Full,
    /// Migrating from chrome-service-backend.
    Migration,
}

impl ExampleKind {
    /// Every example kind, in presentation order.
    pub const ALL: [ExampleKind; 8] = [
        Self::Navigation,
        Self::ServiceTiles,
        Self::Search,
        Self::ModuleConfig,
        Self::MultiBundle,
        Self::NestedNavigation,
        Self::Full,
        Self::Migration,
    ];

    /// Wire name of the example kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::ServiceTiles => "service-tiles",
            Self::Search => "search",
            Self::ModuleConfig => "module-config",
            Self::MultiBundle => "multi-bundle",
            Self::NestedNavigation => "nested-navigation",
            Self::Full => "full",
            Self::Migration => "migration",
        }
    }
}

impl fmt::Display for ExampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExampleKind {
    type Err = FeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FeoError::UnknownRequestKind {
                category: "example",
                value: s.to_string(),
            })
    }
}

/// One route served by the application's root module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// URL path, e.g. `/insights/learning-resources`.
    pub pathname: String,
    /// Bundle passed to the module as `props.bundle`.
    pub bundle: String,
}

impl Route {
    /// The conventional route for an app: `/{bundle}/{app}`.
    pub fn for_app(app_name: &str, bundle: &str) -> Self {
        Self {
            pathname: format!("/{bundle}/{app_name}"),
            bundle: bundle.to_string(),
        }
    }
}

/// Named inputs to template synthesis.
///
/// Every optional field falls back, in order, to a schema-derived
/// recommendation (where one exists) and then to a derived default or a
/// bracketed placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateFields {
    /// Application name (kebab-case, doubles as the repository name).
    pub app_name: String,
    /// Bundle identifier, e.g. `insights`.
    pub bundle: String,
    /// Human-readable display title.
    pub title: Option<String>,
    /// Description used by service tiles and search entries.
    pub description: Option<String>,
    /// Routes for the root module.
    pub routes: Option<Vec<Route>>,
    /// `Some(false)` drops the navigation block from full documents.
    pub include_navigation: Option<bool>,
    /// `Some(false)` drops the service-tiles block from full documents.
    pub include_service_tiles: Option<bool>,
    /// `Some(false)` drops the search-entries block from full documents.
    pub include_search: Option<bool>,
    /// Navigation position override.
    pub position: Option<i64>,
    /// Service tile icon override.
    pub icon: Option<String>,
    /// Navigation product label override.
    pub product_name: Option<String>,
    /// Service tile section override.
    pub section: Option<String>,
    /// Service tile group override.
    pub group: Option<String>,
    /// Federated module manifest location override.
    pub manifest_location: Option<String>,
    /// Default document title override.
    pub document_title: Option<String>,
}

impl TemplateFields {
    /// Fields with only the two mandatory identifiers set.
    pub fn new(app_name: impl Into<String>, bundle: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            bundle: bundle.into(),
            ..Self::default()
        }
    }
}

/// A request for one synthesized template.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateRequest {
    /// What to produce.
    pub kind: TemplateKind,
    /// Inputs.
    pub fields: TemplateFields,
}

impl TemplateRequest {
    /// Build a request.
    pub fn new(kind: TemplateKind, fields: TemplateFields) -> Self {
        Self { kind, fields }
    }
}
