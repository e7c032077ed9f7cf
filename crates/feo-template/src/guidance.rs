//! Static guidance that accompanies generated templates: migration steps,
//! follow-up checklists, quick-reference snippets, and the service tile
//! section catalogue.

use feo_core::{ExampleKind, MigrationType};

/// Ordered steps for moving one kind of configuration out of
/// chrome-service-backend and into `deploy/frontend.yaml`.
pub fn migration_steps(kind: MigrationType) -> &'static [&'static str] {
    match kind {
        MigrationType::Module => &[
            "Enable FEO with `feoConfigEnabled: true`",
            "Add module configuration to replace the fed-modules.json entry",
            "Test that module routing works correctly",
            "Remove the old fed-modules.json entry from chrome-service-backend",
        ],
        MigrationType::Navigation => &[
            "Find the current navigation in chrome-service-backend",
            "Add unique IDs to navigation items (if missing)",
            "Transfer them to bundle segments with an appropriate position",
            "Add feoReplacement markers in chrome-service-backend",
        ],
        MigrationType::ServiceTiles => &[
            "Find the service tiles in chrome-service-backend services.json",
            "Generate services-generated.json with `make parse-services`",
            "Transfer the relevant tiles to the FEO serviceTiles format",
            "Remove the entries from the services.json template",
        ],
        MigrationType::Search => &[
            "Ensure service tiles are migrated first",
            "Define explicit search entries",
            "Remove them from the static search configuration files",
            "Test search functionality",
        ],
        MigrationType::Full => &[
            "Upgrade FEC dependencies to the latest versions",
            "Enable FEO with `feoConfigEnabled: true`",
            "Migrate module configuration",
            "Transfer navigation to bundle segments",
            "Convert service tiles",
            "Create explicit search entries",
            "Mark all items for replacement in chrome-service-backend",
            "Validate and test thoroughly",
        ],
    }
}

/// Checks to run after applying a migration template.
pub const MIGRATION_CHECKLIST: [&str; 4] = [
    "Run `npm run build` to validate",
    "Check for schema validation errors",
    "Test in development environment",
    "Mark corresponding items for replacement in chrome-service-backend",
];

/// One-line summary of an example kind, used when listing kinds.
pub fn example_summary(kind: ExampleKind) -> &'static str {
    match kind {
        ExampleKind::Navigation => "Basic navigation configuration",
        ExampleKind::ServiceTiles => "Service tiles in the Services dropdown",
        ExampleKind::Search => "Search entries for global search",
        ExampleKind::ModuleConfig => "Module and route configuration",
        ExampleKind::MultiBundle => "Complete application spanning multiple bundles",
        ExampleKind::NestedNavigation => "Expandable navigation with nested items",
        ExampleKind::Full => "Full application with all FEO features",
        ExampleKind::Migration => "Migrating from chrome-service-backend to FEO",
    }
}

/// The `spec` keys a quick reference for `kind` shows.
pub fn quick_reference(kind: ExampleKind) -> &'static str {
    match kind {
        ExampleKind::Navigation => NAVIGATION,
        ExampleKind::ServiceTiles => SERVICE_TILES,
        ExampleKind::Search => SEARCH,
        ExampleKind::ModuleConfig => MODULE_CONFIG,
        ExampleKind::MultiBundle => MULTI_BUNDLE,
        ExampleKind::NestedNavigation => NESTED_NAVIGATION,
        ExampleKind::Full => FULL,
        ExampleKind::Migration => MIGRATION,
    }
}

const NAVIGATION: &str = r#"bundleSegments:
  - segmentId: my-app-insights
    bundleId: insights
    position: 800
    navItems:
      - id: my-app
        title: "My Application"
        href: /insights/my-app
        product: "Red Hat Insights""#;

const SERVICE_TILES: &str = r#"serviceTiles:
  - id: my-app
    section: insights
    group: platform
    title: "My Application"
    href: /insights/my-app
    description: "Application description"
    icon: "Application""#;

const SEARCH: &str = r#"searchEntries:
  - id: my-app
    title: "My Application"
    href: /insights/my-app
    description: "Detailed description for search results"
    alt_title:
      - "my app"
      - "alternative keywords""#;

const MODULE_CONFIG: &str = r#"module:
  manifestLocation: "/apps/my-app/fed-mods.json"
  defaultDocumentTitle: "My App | Red Hat Hybrid Cloud Console"
  modules:
    - id: my-app
      module: "./RootApp"
      routes:
        - pathname: /insights/my-app
          props:
            bundle: insights
  analytics:
    APIKey: "PROD-KEY"
    APIKeyDev: "DEV-KEY""#;

const MULTI_BUNDLE: &str = r#"module:
  manifestLocation: "/apps/my-app/fed-mods.json"
  modules:
    - id: my-app
      module: "./RootApp"
      routes:
        - pathname: /insights/my-app
          props:
            bundle: insights
        - pathname: /openshift/my-app
          props:
            bundle: openshift
bundleSegments:
  - segmentId: my-app-insights
    bundleId: insights
    position: 800
    navItems:
      - id: my-app
        title: "My Application"
        href: /insights/my-app
  - segmentId: my-app-openshift
    bundleId: openshift
    position: 1200
    navItems:
      - id: my-app-openshift
        title: "My Application"
        href: /openshift/my-app"#;

const NESTED_NAVIGATION: &str = r#"bundleSegments:
  - segmentId: my-app-insights
    bundleId: insights
    position: 800
    navItems:
      - id: my-app
        title: "My Application"
        expandable: true
        routes:
          - id: my-app-overview
            title: "Overview"
            href: /insights/my-app/overview
          - id: my-app-settings
            title: "Settings"
            href: /insights/my-app/settings"#;

const FULL: &str = r#"feoConfigEnabled: true
frontend:
  paths:
    - "/apps/my-app"
module:
  manifestLocation: "/apps/my-app/fed-mods.json"
  modules:
    - id: my-app
      module: "./RootApp"
      routes:
        - pathname: /insights/my-app
bundleSegments:
  - segmentId: my-app-insights
    bundleId: insights
    position: 800
    navItems:
      - id: my-app
        title: "My Application"
        href: /insights/my-app
serviceTiles:
  - id: my-app
    section: insights
    group: platform
    title: "My Application"
    href: /insights/my-app
    description: "Application description"
    icon: "Application"
searchEntries:
  - id: my-app
    title: "My Application"
    href: /insights/my-app
    description: "Detailed description for search results""#;

const MIGRATION: &str = r#"# deploy/frontend.yaml: take ownership of the nav item
feoConfigEnabled: true
bundleSegments:
  - segmentId: my-app-insights
    bundleId: insights
    position: 800
    navItems:
      - id: my-app
        title: "My Application"
        href: /insights/my-app

# chrome-service-backend: mark the legacy entry as replaced
# {
#   "id": "my-app",
#   "feoReplacement": "my-app"
# }"#;

/// Body of the service tile sections report.
pub const SERVICE_TILE_SECTIONS: &str = r#"Service tiles appear in the Services dropdown of the console masthead.
Each tile names a `section` (the column it appears in) and a `group`
(the heading inside that section):

```yaml
serviceTiles:
  - id: my-app
    section: insights
    group: platform
```

- **section**: identifier of the dropdown column. When the schema declares
  no default, new tiles are placed in `insights`.
- **group**: identifier of the heading inside the section. When the schema
  declares no default, new tiles are placed in `platform`.
- **id**: must be unique across all tiles in the console; reuse the
  application name.
- **href**: the route the tile opens, normally `/{bundle}/{app}`.

Sections and groups must already exist in chrome-service-backend; a tile
naming an unknown section or group is not rendered. Run
`feo field-recommendations serviceTiles --bundle <bundle>` to see the
values the current schema recommends for a bundle."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_migration_lists_every_stage() {
        assert_eq!(migration_steps(MigrationType::Full).len(), 8);
        for kind in MigrationType::ALL {
            assert!(!migration_steps(kind).is_empty());
        }
    }

    #[test]
    fn every_quick_reference_is_valid_yaml() {
        for kind in ExampleKind::ALL {
            let text = quick_reference(kind);
            let parsed: Result<serde_yaml::Value, _> = serde_yaml::from_str(text);
            assert!(parsed.is_ok(), "{kind}: {parsed:?}");
        }
    }

    #[test]
    fn section_references_lead_with_their_key() {
        assert!(quick_reference(ExampleKind::Navigation).starts_with("bundleSegments:"));
        assert!(quick_reference(ExampleKind::ServiceTiles).starts_with("serviceTiles:"));
        assert!(quick_reference(ExampleKind::Search).starts_with("searchEntries:"));
        assert!(quick_reference(ExampleKind::ModuleConfig).starts_with("module:"));
    }
}
