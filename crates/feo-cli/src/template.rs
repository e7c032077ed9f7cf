//! # Template Subcommands
//!
//! `feo migration-template` emits the fragment one migration needs plus the
//! steps to carry it out. `feo setup-template` emits a complete
//! `deploy/frontend.yaml`.
//!
//! Both refresh the schema first. When nothing can be fetched or cached the
//! synthesizer's inline error comment is still shown, and the report is
//! flagged as an error carrying the fetch failure.

use clap::Args;
use feo_core::{
    title_case_identifier, FetchError, MigrationType, TemplateFields, TemplateKind, TemplateRequest,
};
use feo_schema::SchemaStore;
use feo_template::guidance::{migration_steps, MIGRATION_CHECKLIST};
use feo_template::Synthesizer;

use crate::report::ToolReport;

/// Arguments for the migration-template subcommand.
#[derive(Args, Debug)]
pub struct MigrationArgs {
    /// Application name (kebab-case, usually the repository name).
    pub app_name: String,

    /// Bundle the application lives in (e.g. insights, openshift).
    pub bundle: String,

    /// What to migrate: module, navigation, service-tiles, search, or full.
    #[arg(value_name = "TYPE")]
    pub migration_type: String,

    /// Display title; derived from the app name when omitted.
    #[arg(long)]
    pub title: Option<String>,
}

/// Arguments for the setup-template subcommand.
#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Application name (kebab-case, usually the repository name).
    pub app_name: String,

    /// Bundle the application lives in.
    pub bundle: String,

    /// Display title.
    #[arg(long)]
    pub title: String,

    /// Description for service tiles and search entries.
    #[arg(long)]
    pub description: Option<String>,

    /// Leave out the navigation bundle segment.
    #[arg(long)]
    pub no_navigation: bool,

    /// Leave out the service tile.
    #[arg(long)]
    pub no_service_tiles: bool,

    /// Leave out the search entry.
    #[arg(long)]
    pub no_search: bool,
}

/// Execute the migration-template subcommand.
pub async fn run_migration(args: &MigrationArgs, store: &SchemaStore) -> ToolReport {
    let kind: MigrationType = match args.migration_type.parse() {
        Ok(kind) => kind,
        Err(e) => {
            tracing::warn!(error = %e, "rejected migration type");
            let available: Vec<&str> = MigrationType::ALL.iter().map(|k| k.as_str()).collect();
            return ToolReport::ok(format!(
                "# Error generating template: {e}\n\nAvailable migration types: {}",
                available.join(", ")
            ));
        }
    };

    let fetch = store.ensure_fresh().await.err();
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| title_case_identifier(&args.app_name));

    let mut fields = TemplateFields::new(&args.app_name, &args.bundle);
    fields.title = Some(title.clone());
    let template = Synthesizer::new(store)
        .synthesize(&TemplateRequest::new(kind.template_kind(), fields));

    let steps = numbered(migration_steps(kind));
    let checklist = numbered(&MIGRATION_CHECKLIST);
    let text = format!(
        "# FEO Migration Template: {kind}\n\n\
         App: **{app}** → **{title}**\n\
         Bundle: **{bundle}**\n\n\
         ## Configuration to Add/Update\n\n\
         ```yaml\n{template}\n```\n\n\
         ## Migration Steps\n\n{steps}\n\n\
         ## Validation\n\n\
         After applying this configuration:\n{checklist}",
        app = args.app_name,
        bundle = args.bundle,
    );
    finish(text, fetch)
}

/// Execute the setup-template subcommand.
pub async fn run_setup(args: &SetupArgs, store: &SchemaStore) -> ToolReport {
    let fetch = store.ensure_fresh().await.err();

    let mut fields = TemplateFields::new(&args.app_name, &args.bundle);
    fields.title = Some(args.title.clone());
    fields.description = args.description.clone();
    fields.include_navigation = Some(!args.no_navigation);
    fields.include_service_tiles = Some(!args.no_service_tiles);
    fields.include_search = Some(!args.no_search);
    let template =
        Synthesizer::new(store).synthesize(&TemplateRequest::new(TemplateKind::Full, fields));

    let text = format!(
        "# Complete Frontend.yaml Template\n\n\
         Generated for: **{title}** ({app})\n\
         Bundle: **{bundle}**\n\n\
         ## Template\n\n\
         ```yaml\n{template}\n```\n\n\
         ## Next Steps\n\n{NEXT_STEPS}",
        title = args.title,
        app = args.app_name,
        bundle = args.bundle,
    );
    finish(text, fetch)
}

const NEXT_STEPS: &str = "1. **Save** this as `deploy/frontend.yaml` in your repository
2. **Update values**:
   - Replace `[PRODUCTION-API-KEY]` with your analytics key
   - Replace `[DEVELOPMENT-API-KEY]` with your dev analytics key
   - Adjust the position value for the desired navigation placement
   - Customize the description and alt_title entries
3. **Validate**:
   ```bash
   feo validate deploy/frontend.yaml
   npm run build  # also validates against the schema
   ```
4. **Test** in a development environment
5. **Deploy** to staging and production";

fn numbered(items: &[&str]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn finish(text: String, fetch: Option<FetchError>) -> ToolReport {
    match fetch {
        None => ToolReport::ok(text),
        Some(e) => ToolReport::error(format!("{text}\n\nError fetching FEO schema: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_starts_at_one() {
        assert_eq!(numbered(&["a", "b"]), "1. a\n2. b");
    }

    #[test]
    fn fetch_failure_flags_report() {
        let report = finish(
            "body".into(),
            Some(FetchError::Status {
                location: "https://schemas.test".into(),
                status: 502,
            }),
        );
        assert!(report.is_error);
        assert!(report.text.ends_with("https://schemas.test returned HTTP 502"));
    }
}
