//! # Field Recommendations Subcommand
//!
//! `feo field-recommendations <PATH>` reports what the schema says about a
//! `frontendSpec` field: required children, declared defaults, and examples.
//! With `--bundle` it also lists the bundle recommendations.

use std::sync::Arc;

use clap::Args;
use feo_core::{FeoError, SchemaPath};
use feo_schema::{CacheEntry, Navigator, SchemaStore};
use feo_template::Recommender;

use crate::report::ToolReport;

/// Arguments for the field-recommendations subcommand.
#[derive(Args, Debug)]
pub struct FieldArgs {
    /// Dotted path below `frontendSpec`, e.g. `module` or `bundleSegments`.
    pub field_path: String,

    /// Bundle to include recommendations for.
    #[arg(long)]
    pub bundle: Option<String>,
}

/// Execute the field-recommendations subcommand.
pub async fn run_fields(args: &FieldArgs, store: &SchemaStore) -> ToolReport {
    match store.ensure_fresh().await {
        Ok(entry) => match field_report(&entry, &args.field_path, args.bundle.as_deref()) {
            Ok(text) => ToolReport::ok(text),
            Err(e) => ToolReport::error(format!("Error getting field recommendations: {e}")),
        },
        Err(e) => ToolReport::error(format!(
            "Error getting field recommendations: {}",
            FeoError::from(e)
        )),
    }
}

/// Render recommendations for `field_path` from `entry`.
pub fn field_report(
    entry: &Arc<CacheEntry>,
    field_path: &str,
    bundle: Option<&str>,
) -> Result<String, serde_yaml::Error> {
    let nav = Navigator::new(entry.document());
    let path = SchemaPath::spec_field(field_path);

    let mut out = format!("# Field Recommendations: {field_path}\n\n");

    if nav.resolve(&path).is_none() {
        out.push_str(&format!("No schema node found at `{path}`.\n\n"));
    }

    let required = nav.required_of(&path);
    if !required.is_empty() {
        out.push_str("## Required Fields\n");
        for name in &required {
            out.push_str(&format!("- `{name}`\n"));
        }
        out.push('\n');
    }

    let defaults = nav.defaults_of(&path);
    if !defaults.is_empty() {
        out.push_str("## Default Values\n");
        for (name, value) in &defaults {
            out.push_str(&format!("- `{name}`: `{value}`\n"));
        }
        out.push('\n');
    }

    let examples = nav.examples_of(&path);
    if !examples.is_empty() {
        let rendered = examples
            .iter()
            .map(serde_yaml::to_string)
            .collect::<Result<Vec<_>, _>>()?;
        out.push_str(&format!(
            "## Schema Examples\n```yaml\n{}```\n\n",
            rendered.join("---\n")
        ));
    }

    if let Some(bundle) = bundle {
        let rec = Recommender::new(Some(Arc::clone(entry)));
        let section = rec.service_section(bundle);
        out.push_str(&format!(
            "## Bundle-Specific Recommendations for '{bundle}'\n\
             - Position: {}\n\
             - Product: {}\n\
             - Service Section: {}\n\
             - Service Group: {}\n\
             - Icon: {}\n",
            rec.position(bundle),
            rec.product_name(bundle),
            section.section,
            section.group,
            rec.icon(bundle),
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn entry() -> Arc<CacheEntry> {
        Arc::new(CacheEntry::new(
            json!({
                "$defs": { "frontendSpec": { "properties": {
                    "module": {
                        "required": ["manifestLocation", "modules"],
                        "examples": [{ "manifestLocation": "/apps/a/fed-mods.json" }],
                        "properties": {
                            "manifestLocation": { "type": "string" },
                            "isFedramp": { "type": "boolean", "default": false }
                        }
                    }
                } } }
            }),
            Utc::now(),
            "test://",
        ))
    }

    #[test]
    fn module_report_lists_required_defaults_and_examples() {
        let text = field_report(&entry(), "module", None).unwrap();
        assert!(text.starts_with("# Field Recommendations: module\n\n"));
        assert!(text.contains("## Required Fields\n- `manifestLocation`\n- `modules`\n"));
        assert!(text.contains("- `isFedramp`: `false`"));
        assert!(text.contains("```yaml\nmanifestLocation: /apps/a/fed-mods.json\n```"));
        assert!(!text.contains("Bundle-Specific"));
    }

    #[test]
    fn bundle_recommendations_fall_back() {
        let text = field_report(&entry(), "module", Some("service-now")).unwrap();
        assert!(text.contains("## Bundle-Specific Recommendations for 'service-now'"));
        assert!(text.contains("- Position: 800"));
        assert!(text.contains("- Product: Service Now"));
        assert!(text.contains("- Service Section: insights"));
        assert!(text.contains("- Service Group: platform"));
        assert!(text.contains("- Icon: Application"));
    }

    #[test]
    fn unknown_field_is_noted() {
        let text = field_report(&entry(), "nope.deeper", None).unwrap();
        assert!(text.contains("No schema node found at `frontendSpec.nope.deeper`."));
    }
}
