//! # Template Fragments
//!
//! A [`Fragment`] is one block of a `frontendSpec`, already filled in with
//! concrete values. Fragments render to spec-relative lines (indent zero);
//! the synthesizer decides how deep to nest them.
//!
//! Free text (titles, paths, descriptions) is emitted as JSON-escaped
//! double-quoted scalars, which YAML reads verbatim. Identifiers derived
//! from the app and bundle names are emitted bare.

use feo_core::Route;
use serde_json::Value;

/// One block of a synthesized `frontendSpec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// `feoConfigEnabled: true`.
    FeatureFlag,
    /// Static asset paths.
    Assets { app_name: String },
    /// Federated module and its routes.
    Module {
        app_name: String,
        manifest_location: String,
        document_title: String,
        routes: Vec<Route>,
        analytics: bool,
    },
    /// One bundle segment with a single nav item.
    Navigation {
        app_name: String,
        bundle: String,
        title: String,
        position: i64,
        product: String,
    },
    /// One tile in the Services dropdown.
    ServiceTiles {
        app_name: String,
        bundle: String,
        title: String,
        section: String,
        group: String,
        description: String,
        icon: String,
    },
    /// One global search entry.
    SearchEntries {
        app_name: String,
        bundle: String,
        title: String,
        description: String,
        alt_titles: Vec<String>,
    },
    /// A requested section the schema does not define.
    Undefined { property: &'static str },
}

impl Fragment {
    /// Comment placed above the block in a full document.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Self::FeatureFlag | Self::Undefined { .. } => None,
            Self::Assets { .. } => Some("Frontend assets configuration"),
            Self::Module { .. } => Some("Module configuration"),
            Self::Navigation { .. } => Some("Navigation bundle segment"),
            Self::ServiceTiles { .. } => Some("Service tiles for services dropdown"),
            Self::SearchEntries { .. } => Some("Search entries for global search"),
        }
    }

    /// The block's lines, relative to `spec:`.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::FeatureFlag => vec!["feoConfigEnabled: true".to_string()],
            Self::Assets { app_name } => vec![
                "frontend:".to_string(),
                "  paths:".to_string(),
                format!("    - {}", quoted(&format!("/apps/{app_name}"))),
            ],
            Self::Module {
                app_name,
                manifest_location,
                document_title,
                routes,
                analytics,
            } => {
                let mut lines = vec![
                    "module:".to_string(),
                    format!("  manifestLocation: {}", quoted(manifest_location)),
                    format!("  defaultDocumentTitle: {}", quoted(document_title)),
                    "  modules:".to_string(),
                    format!("    - id: {app_name}"),
                    format!("      module: {}", quoted("./RootApp")),
                    "      routes:".to_string(),
                ];
                for route in routes {
                    lines.push(format!("        - pathname: {}", quoted(&route.pathname)));
                    lines.push("          props:".to_string());
                    lines.push(format!("            bundle: {}", route.bundle));
                }
                if *analytics {
                    lines.push("  analytics:".to_string());
                    lines.push(format!("    APIKey: {}", quoted(PRODUCTION_API_KEY)));
                    lines.push(format!("    APIKeyDev: {}", quoted(DEVELOPMENT_API_KEY)));
                }
                lines
            }
            Self::Navigation {
                app_name,
                bundle,
                title,
                position,
                product,
            } => vec![
                "bundleSegments:".to_string(),
                format!("  - segmentId: {app_name}-{bundle}"),
                format!("    bundleId: {bundle}"),
                format!("    position: {position}"),
                "    navItems:".to_string(),
                format!("      - id: {app_name}"),
                format!("        title: {}", quoted(title)),
                format!("        href: /{bundle}/{app_name}"),
                format!("        product: {}", quoted(product)),
            ],
            Self::ServiceTiles {
                app_name,
                bundle,
                title,
                section,
                group,
                description,
                icon,
            } => vec![
                "serviceTiles:".to_string(),
                format!("  - id: {app_name}"),
                format!("    section: {section}"),
                format!("    group: {group}"),
                format!("    title: {}", quoted(title)),
                format!("    href: /{bundle}/{app_name}"),
                format!("    description: {}", quoted(description)),
                format!("    icon: {}", quoted(icon)),
            ],
            Self::SearchEntries {
                app_name,
                bundle,
                title,
                description,
                alt_titles,
            } => {
                let mut lines = vec![
                    "searchEntries:".to_string(),
                    format!("  - id: {app_name}"),
                    format!("    title: {}", quoted(title)),
                    format!("    href: /{bundle}/{app_name}"),
                    format!("    description: {}", quoted(description)),
                    "    alt_title:".to_string(),
                ];
                lines.extend(alt_titles.iter().map(|alt| format!("      - {}", quoted(alt))));
                lines
            }
            Self::Undefined { property } => {
                vec![format!("# `{property}` is not defined in the current schema")]
            }
        }
    }
}

/// Placeholder for the production analytics key.
pub const PRODUCTION_API_KEY: &str = "[PRODUCTION-API-KEY]";
/// Placeholder for the development analytics key.
pub const DEVELOPMENT_API_KEY: &str = "[DEVELOPMENT-API-KEY]";

/// A double-quoted YAML scalar holding exactly `text`.
pub(crate) fn quoted(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_escapes_embedded_quotes() {
        assert_eq!(quoted(r#"The "Best" App"#), r#""The \"Best\" App""#);
        assert_eq!(quoted("plain"), r#""plain""#);
    }

    #[test]
    fn module_lists_every_route() {
        let fragment = Fragment::Module {
            app_name: "inventory".into(),
            manifest_location: "/apps/inventory/fed-mods.json".into(),
            document_title: "Inventory".into(),
            routes: vec![
                Route::for_app("inventory", "insights"),
                Route::for_app("inventory", "openshift"),
            ],
            analytics: false,
        };
        let lines = fragment.lines();
        assert!(lines.contains(&r#"        - pathname: "/insights/inventory""#.to_string()));
        assert!(lines.contains(&"            bundle: openshift".to_string()));
        assert!(!lines.iter().any(|l| l.contains("analytics")));
    }

    #[test]
    fn analytics_block_uses_placeholders() {
        let fragment = Fragment::Module {
            app_name: "inventory".into(),
            manifest_location: "/apps/inventory/fed-mods.json".into(),
            document_title: "Inventory".into(),
            routes: vec![Route::for_app("inventory", "insights")],
            analytics: true,
        };
        let lines = fragment.lines();
        assert!(lines.contains(&r#"    APIKey: "[PRODUCTION-API-KEY]""#.to_string()));
        assert!(lines.contains(&r#"    APIKeyDev: "[DEVELOPMENT-API-KEY]""#.to_string()));
    }

    #[test]
    fn feature_flag_has_no_heading() {
        assert_eq!(Fragment::FeatureFlag.heading(), None);
        assert_eq!(
            Fragment::Assets { app_name: "x".into() }.heading(),
            Some("Frontend assets configuration")
        );
    }
}
