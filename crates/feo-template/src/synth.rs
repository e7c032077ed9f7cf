//! # Template Synthesis
//!
//! Turns a [`TemplateRequest`] into `frontend.yaml` text shaped by whatever
//! the cached schema defines.
//!
//! ## Plan, then render
//!
//! [`Synthesizer::plan`] decides which [`Fragment`]s appear and fills in
//! their values; [`Plan::render`] only lays out text. Only blocks whose
//! property exists under `frontendSpec` are planned, so a schema that drops
//! a section drops it from every template.
//!
//! ## Value priority
//!
//! Caller field, then schema recommendation (position, icon, product,
//! section, group), then a derived default or bracketed placeholder.
//!
//! ## Failure as text
//!
//! [`Synthesizer::synthesize`] never fails. A missing schema or a schema
//! without `frontendSpec` produces a one-line YAML comment naming the
//! problem, so the output is still a well-formed document.

use std::sync::Arc;

use feo_core::{title_case_identifier, FeoError, Route, SchemaPath, TemplateKind, TemplateRequest};
use feo_schema::{CacheEntry, Navigator, SchemaNode, SchemaStore};

use crate::fragment::{quoted, Fragment};
use crate::recommend::Recommender;

/// Emitted when no schema has been cached.
pub const SCHEMA_NOT_LOADED: &str = "# Error: Schema not loaded. Please fetch schema first.";

/// Prefix of every other synthesis error line.
pub const GENERATION_ERROR_PREFIX: &str = "# Error generating template:";

/// Indent of `spec` children in a full document (`objects[0].spec`).
const DOCUMENT_INDENT: usize = 6;
/// Indent of `spec` children in a section template.
const SECTION_INDENT: usize = 2;

const DOCUMENT_TITLE_SUFFIX: &str = "Red Hat Hybrid Cloud Console";
const DEPLOYMENT_REPO_BASE: &str = "https://github.com/RedHatInsights";

/// How the planned fragments are wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// A complete OpenShift `Template` carrying one `Frontend` object.
    Document {
        schema_location: String,
        app_name: String,
        title: String,
    },
    /// A `spec:` excerpt to paste into an existing `deploy/frontend.yaml`.
    Section,
}

/// The fragments of one template, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub layout: Layout,
    pub fragments: Vec<Fragment>,
}

impl Plan {
    /// Lay out the plan as YAML text.
    pub fn render(&self) -> String {
        let mut out: Vec<String> = Vec::new();
        match &self.layout {
            Layout::Document {
                schema_location,
                app_name,
                title,
            } => {
                out.extend(skeleton(schema_location, app_name, title));
                let pad = " ".repeat(DOCUMENT_INDENT);
                for fragment in &self.fragments {
                    if let Some(heading) = fragment.heading() {
                        out.push(String::new());
                        out.push(format!("{pad}# {heading}"));
                    }
                    out.extend(fragment.lines().into_iter().map(|l| format!("{pad}{l}")));
                }
            }
            Layout::Section => {
                out.push("# In your deploy/frontend.yaml".to_string());
                out.push("spec:".to_string());
                let pad = " ".repeat(SECTION_INDENT);
                for fragment in &self.fragments {
                    out.extend(fragment.lines().into_iter().map(|l| format!("{pad}{l}")));
                }
            }
        }
        out.join("\n")
    }
}

fn skeleton(schema_location: &str, app_name: &str, title: &str) -> Vec<String> {
    vec![
        format!("# yaml-language-server: $schema={schema_location}"),
        String::new(),
        "apiVersion: v1".to_string(),
        "kind: Template".to_string(),
        "metadata:".to_string(),
        format!("  name: {app_name}"),
        "parameters:".to_string(),
        "  - name: ENV_NAME".to_string(),
        "    required: true".to_string(),
        "  - name: IMAGE".to_string(),
        "    required: true".to_string(),
        "  - name: IMAGE_TAG".to_string(),
        "    required: true".to_string(),
        "objects:".to_string(),
        "  - apiVersion: cloud.redhat.com/v1alpha1".to_string(),
        "    kind: Frontend".to_string(),
        "    metadata:".to_string(),
        format!("      name: {app_name}"),
        "    spec:".to_string(),
        "      envName: ${ENV_NAME}".to_string(),
        format!("      title: {}", quoted(title)),
        format!("      deploymentRepo: {DEPLOYMENT_REPO_BASE}/{app_name}"),
        "      image: ${IMAGE}:${IMAGE_TAG}".to_string(),
    ]
}

/// Builds templates from one schema snapshot.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    entry: Option<Arc<CacheEntry>>,
    recommender: Recommender,
}

impl Synthesizer {
    /// Snapshot the store's current entry. Nothing is fetched.
    pub fn new(store: &SchemaStore) -> Self {
        Self::from_entry(store.current())
    }

    pub fn from_entry(entry: Option<Arc<CacheEntry>>) -> Self {
        Self {
            recommender: Recommender::new(entry.clone()),
            entry,
        }
    }

    /// Render `request`, turning every failure into a comment line.
    pub fn synthesize(&self, request: &TemplateRequest) -> String {
        match self.plan(request) {
            Ok(plan) => plan.render(),
            Err(FeoError::SchemaUnavailable) => SCHEMA_NOT_LOADED.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, kind = %request.kind, "template synthesis failed");
                format!("{GENERATION_ERROR_PREFIX} {e}")
            }
        }
    }

    /// Decide the fragments for `request`.
    ///
    /// # Errors
    ///
    /// [`FeoError::SchemaUnavailable`] without a cached schema, and
    /// [`FeoError::SchemaStructure`] when the schema has no `frontendSpec`.
    pub fn plan(&self, request: &TemplateRequest) -> Result<Plan, FeoError> {
        let entry = self.entry.as_ref().ok_or(FeoError::SchemaUnavailable)?;
        let nav = Navigator::new(entry.document());
        let spec = nav.resolve(&SchemaPath::frontend_spec()).ok_or_else(|| {
            FeoError::SchemaStructure("frontend spec not found in schema".to_string())
        })?;

        let values = Values::resolve(request, &self.recommender);
        let plan = match request.kind.section_property() {
            None => Plan {
                layout: Layout::Document {
                    schema_location: entry.source().to_string(),
                    app_name: values.app_name.clone(),
                    title: values.title.clone(),
                },
                fragments: plan_document(spec, request, &values),
            },
            Some(property) => Plan {
                layout: Layout::Section,
                fragments: plan_section(spec, request.kind, property, &values),
            },
        };
        tracing::debug!(
            kind = %request.kind,
            app = %values.app_name,
            fragments = plan.fragments.len(),
            "template planned"
        );
        Ok(plan)
    }
}

fn plan_document(spec: SchemaNode<'_>, request: &TemplateRequest, values: &Values) -> Vec<Fragment> {
    let fields = &request.fields;
    let mut fragments = Vec::new();

    if spec.has_property("feoConfigEnabled") {
        fragments.push(Fragment::FeatureFlag);
    }
    if spec.has_property("frontend") {
        fragments.push(Fragment::Assets {
            app_name: values.app_name.clone(),
        });
    }
    if let Some(module) = section_fragment(spec, TemplateKind::Module, values) {
        fragments.push(module);
    }

    let gated = [
        (TemplateKind::Navigation, fields.include_navigation),
        (TemplateKind::ServiceTiles, fields.include_service_tiles),
        (TemplateKind::SearchEntries, fields.include_search),
    ];
    for (kind, include) in gated {
        if include == Some(false) {
            continue;
        }
        if let Some(fragment) = section_fragment(spec, kind, values) {
            fragments.push(fragment);
        }
    }
    fragments
}

fn plan_section(
    spec: SchemaNode<'_>,
    kind: TemplateKind,
    property: &'static str,
    values: &Values,
) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    if spec.has_property("feoConfigEnabled") {
        fragments.push(Fragment::FeatureFlag);
    }
    fragments.push(section_fragment(spec, kind, values).unwrap_or(Fragment::Undefined { property }));
    fragments
}

/// The fragment for a single-section kind, if the schema defines it.
fn section_fragment(spec: SchemaNode<'_>, kind: TemplateKind, values: &Values) -> Option<Fragment> {
    let property = kind.section_property()?;
    let node = spec.property(property)?;
    let v = values.clone();
    let fragment = match kind {
        TemplateKind::Full => return None,
        TemplateKind::Module => Fragment::Module {
            app_name: v.app_name,
            manifest_location: v.manifest_location,
            document_title: v.document_title,
            routes: v.routes,
            analytics: node.has_property("analytics"),
        },
        TemplateKind::Navigation => Fragment::Navigation {
            app_name: v.app_name,
            bundle: v.bundle,
            title: v.title,
            position: v.position,
            product: v.product,
        },
        TemplateKind::ServiceTiles => Fragment::ServiceTiles {
            app_name: v.app_name,
            bundle: v.bundle,
            description: v
                .description
                .unwrap_or_else(|| format!("[Brief description of what {} does]", v.title)),
            title: v.title,
            section: v.section,
            group: v.group,
            icon: v.icon,
        },
        TemplateKind::SearchEntries => Fragment::SearchEntries {
            alt_titles: alt_titles(&v.title, &v.app_name),
            app_name: v.app_name,
            bundle: v.bundle,
            title: v.title,
            description: v
                .description
                .unwrap_or_else(|| "[Detailed description for search results]".to_string()),
        },
    };
    Some(fragment)
}

/// Alternate search titles: the first word of the title and the app name
/// read as words. A title without words falls back to the title-cased app
/// name.
fn alt_titles(title: &str, app_name: &str) -> Vec<String> {
    let first = match title.split_whitespace().next() {
        Some(word) => word.to_string(),
        None => title_case_identifier(app_name),
    };
    vec![first, app_name.replace('-', " ")]
}

/// Every value a fragment may need, with fallbacks applied.
#[derive(Debug, Clone)]
struct Values {
    app_name: String,
    bundle: String,
    title: String,
    description: Option<String>,
    manifest_location: String,
    document_title: String,
    routes: Vec<Route>,
    position: i64,
    product: String,
    section: String,
    group: String,
    icon: String,
}

impl Values {
    fn resolve(request: &TemplateRequest, recommender: &Recommender) -> Self {
        let f = &request.fields;
        let app_name = f.app_name.clone();
        let bundle = f.bundle.clone();
        let title = f
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map_or_else(|| title_case_identifier(&app_name), str::to_string);
        let recommended = recommender.service_section(&bundle);

        Self {
            description: f.description.clone(),
            manifest_location: f
                .manifest_location
                .clone()
                .unwrap_or_else(|| format!("/apps/{app_name}/fed-mods.json")),
            document_title: f
                .document_title
                .clone()
                .unwrap_or_else(|| format!("{title} | {DOCUMENT_TITLE_SUFFIX}")),
            routes: f
                .routes
                .clone()
                .unwrap_or_else(|| vec![Route::for_app(&app_name, &bundle)]),
            position: f.position.unwrap_or_else(|| recommender.position(&bundle)),
            product: f
                .product_name
                .clone()
                .unwrap_or_else(|| recommender.product_name(&bundle)),
            section: f.section.clone().unwrap_or(recommended.section),
            group: f.group.clone().unwrap_or(recommended.group),
            icon: f.icon.clone().unwrap_or_else(|| recommender.icon(&bundle)),
            app_name,
            bundle,
            title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use feo_core::TemplateFields;
    use serde_json::{json, Value};

    fn spec_schema() -> Value {
        json!({
            "$defs": {
                "frontendSpec": {
                    "properties": {
                        "feoConfigEnabled": { "type": "boolean" },
                        "frontend": { "type": "object" },
                        "module": { "properties": { "analytics": {} } },
                        "bundleSegments": {
                            "items": { "properties": { "position": { "default": 800 } } }
                        },
                        "serviceTiles": {},
                        "searchEntries": {}
                    }
                }
            }
        })
    }

    fn synth(document: Value) -> Synthesizer {
        Synthesizer::from_entry(Some(Arc::new(CacheEntry::new(
            document,
            Utc::now(),
            "https://schemas.test/frontend-crd.schema.json",
        ))))
    }

    fn request(kind: TemplateKind) -> TemplateRequest {
        TemplateRequest::new(kind, TemplateFields::new("learning-resources", "insights"))
    }

    fn kinds(plan: &Plan) -> Vec<&'static str> {
        plan.fragments
            .iter()
            .map(|f| match f {
                Fragment::FeatureFlag => "flag",
                Fragment::Assets { .. } => "assets",
                Fragment::Module { .. } => "module",
                Fragment::Navigation { .. } => "navigation",
                Fragment::ServiceTiles { .. } => "tiles",
                Fragment::SearchEntries { .. } => "search",
                Fragment::Undefined { .. } => "undefined",
            })
            .collect()
    }

    #[test]
    fn no_schema_is_reported_inline() {
        let synth = Synthesizer::from_entry(None);
        assert_eq!(synth.synthesize(&request(TemplateKind::Full)), SCHEMA_NOT_LOADED);
    }

    #[test]
    fn missing_frontend_spec_is_reported_inline() {
        let out = synth(json!({ "$defs": {} })).synthesize(&request(TemplateKind::Module));
        assert_eq!(
            out,
            "# Error generating template: frontend spec not found in schema"
        );
    }

    #[test]
    fn full_plan_follows_fixed_order() {
        let plan = synth(spec_schema()).plan(&request(TemplateKind::Full)).unwrap();
        assert_eq!(
            kinds(&plan),
            vec!["flag", "assets", "module", "navigation", "tiles", "search"]
        );
    }

    #[test]
    fn inclusion_flags_drop_blocks_from_full_documents() {
        let mut req = request(TemplateKind::Full);
        req.fields.include_service_tiles = Some(false);
        req.fields.include_search = Some(false);
        let plan = synth(spec_schema()).plan(&req).unwrap();
        assert_eq!(kinds(&plan), vec!["flag", "assets", "module", "navigation"]);
    }

    #[test]
    fn schema_absence_wins_over_inclusion_flag() {
        let mut schema = spec_schema();
        schema["$defs"]["frontendSpec"]["properties"]
            .as_object_mut()
            .unwrap()
            .remove("serviceTiles");
        let mut req = request(TemplateKind::Full);
        req.fields.include_service_tiles = Some(true);
        let plan = synth(schema).plan(&req).unwrap();
        assert!(!kinds(&plan).contains(&"tiles"));
    }

    #[test]
    fn section_ignores_inclusion_flags() {
        let mut req = request(TemplateKind::ServiceTiles);
        req.fields.include_service_tiles = Some(false);
        let plan = synth(spec_schema()).plan(&req).unwrap();
        assert_eq!(plan.layout, Layout::Section);
        assert_eq!(kinds(&plan), vec!["flag", "tiles"]);
    }

    #[test]
    fn undefined_section_is_noted() {
        let schema = json!({ "$defs": { "frontendSpec": { "properties": {} } } });
        let out = synth(schema).synthesize(&request(TemplateKind::SearchEntries));
        assert_eq!(
            out,
            "# In your deploy/frontend.yaml\nspec:\n  # `searchEntries` is not defined in the current schema"
        );
    }

    #[test]
    fn navigation_section_text() {
        let mut req = request(TemplateKind::Navigation);
        req.fields.title = Some("Learning Resources".into());
        let out = synth(spec_schema()).synthesize(&req);
        let expected = r#"# In your deploy/frontend.yaml
spec:
  feoConfigEnabled: true
  bundleSegments:
    - segmentId: learning-resources-insights
      bundleId: insights
      position: 800
      navItems:
        - id: learning-resources
          title: "Learning Resources"
          href: /insights/learning-resources
          product: "Insights""#;
        assert_eq!(out, expected);
    }

    #[test]
    fn caller_fields_override_recommendations() {
        let mut req = request(TemplateKind::Navigation);
        req.fields.position = Some(150);
        req.fields.product_name = Some("Red Hat Insights".into());
        let out = synth(spec_schema()).synthesize(&req);
        assert!(out.contains("      position: 150"));
        assert!(out.contains(r#"product: "Red Hat Insights""#));
    }

    #[test]
    fn derived_defaults_fill_module() {
        let out = synth(spec_schema()).synthesize(&request(TemplateKind::Module));
        assert!(out.contains(r#"manifestLocation: "/apps/learning-resources/fed-mods.json""#));
        assert!(out.contains(
            r#"defaultDocumentTitle: "Learning Resources | Red Hat Hybrid Cloud Console""#
        ));
        assert!(out.contains(r#"- pathname: "/insights/learning-resources""#));
        assert!(out.contains(r#"APIKey: "[PRODUCTION-API-KEY]""#));
    }

    #[test]
    fn full_document_blocks_are_headed_and_nested() {
        let out = synth(spec_schema()).synthesize(&request(TemplateKind::Full));
        assert!(out.starts_with(
            "# yaml-language-server: $schema=https://schemas.test/frontend-crd.schema.json\n"
        ));
        assert!(out.contains("      image: ${IMAGE}:${IMAGE_TAG}\n      feoConfigEnabled: true\n\n      # Frontend assets configuration\n      frontend:"));
        assert!(out.contains("\n\n      # Search entries for global search\n      searchEntries:"));
    }

    #[test]
    fn placeholders_fill_missing_descriptions() {
        let out = synth(spec_schema()).synthesize(&request(TemplateKind::Full));
        assert!(out.contains(
            r#"description: "[Brief description of what Learning Resources does]""#
        ));
        assert!(out.contains(r#"description: "[Detailed description for search results]""#));
        assert!(out.contains("            - \"Learning\"\n            - \"learning resources\""));
    }

    #[test]
    fn titles_with_quotes_stay_valid_yaml() {
        let mut req = request(TemplateKind::Full);
        req.fields.title = Some(r#"The "Learning" Hub"#.into());
        let out = synth(spec_schema()).synthesize(&req);
        let parsed: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(
            parsed["objects"][0]["spec"]["title"].as_str(),
            Some(r#"The "Learning" Hub"#)
        );
    }

    #[test]
    fn alternate_titles() {
        assert_eq!(
            alt_titles("Learning Resources", "learning-resources"),
            vec!["Learning", "learning resources"]
        );
        assert_eq!(
            alt_titles("  ", "learning-resources"),
            vec!["Learning Resources", "learning resources"]
        );
    }

    #[test]
    fn blank_title_falls_back_to_app_name() {
        let mut req = request(TemplateKind::SearchEntries);
        req.fields.title = Some("   ".into());
        let out = synth(spec_schema()).synthesize(&req);
        assert!(out.contains("title: \"Learning Resources\""), "{out}");
        assert!(out.contains("- \"Learning\"\n"), "{out}");
        assert!(!out.contains("- \"\""), "{out}");
    }
}
