//! # Schema Subcommand
//!
//! `feo schema` fetches (or reuses) the cached schema and summarises it.

use chrono::{DateTime, Utc};
use clap::Args;
use feo_schema::{CacheEntry, SchemaNode, SchemaStore};

use crate::report::ToolReport;

/// Arguments for the schema subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Omit the full schema JSON from the report.
    #[arg(long)]
    pub summary_only: bool,
}

/// Execute the schema subcommand.
pub async fn run_schema(args: &SchemaArgs, store: &SchemaStore) -> ToolReport {
    match store.ensure_fresh().await {
        Ok(entry) => ToolReport::ok(schema_report(&entry, Utc::now(), !args.summary_only)),
        Err(e) => ToolReport::error(format!("Error fetching FEO schema: {e}")),
    }
}

/// Render the summary of `entry` as seen at `now`.
pub fn schema_report(entry: &CacheEntry, now: DateTime<Utc>, include_full: bool) -> String {
    let doc = entry.document();
    let root = SchemaNode::new(doc);
    let field = |key: &str| doc.get(key).and_then(|v| v.as_str()).map(str::to_string);

    let mut out = format!(
        "# Frontend Operator CRD Schema\n\n\
         Latest schema from: {}\n\
         Cache age: {} minutes (refreshes hourly)\n",
        entry.source(),
        entry.age_minutes_at(now),
    );
    if entry.is_stale_at(now) {
        out.push_str("Note: the last refresh failed; this copy is stale.\n");
    }

    out.push_str(&format!(
        "\n## Schema Structure\n\
         - **Version**: {}\n\
         - **Title**: {}\n\
         - **Root Type**: {}\n",
        field("$schema").unwrap_or_else(|| "JSON Schema Draft 2020-12".to_string()),
        field("title").unwrap_or_else(|| "(none)".to_string()),
        field("type").unwrap_or_else(|| "(none)".to_string()),
    ));

    out.push_str("\n## Key Definitions\n");
    for name in root.definition_names() {
        let description = root
            .definition(name)
            .and_then(|d| d.description())
            .unwrap_or("No description");
        out.push_str(&format!("- **{name}**: {description}\n"));
    }

    if include_full {
        out.push_str(&format!("\n## Full Schema\n```json\n{doc:#}\n```"));
    }
    out
}
