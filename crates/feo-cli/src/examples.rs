//! # Examples Subcommand
//!
//! `feo examples <TYPE>` prints a quick-reference snippet for one kind of
//! FEO configuration. Unknown types list the available ones.

use clap::Args;
use feo_core::ExampleKind;
use feo_template::guidance::{example_summary, quick_reference};

use crate::report::ToolReport;

/// Arguments for the examples subcommand.
#[derive(Args, Debug)]
pub struct ExamplesArgs {
    /// navigation, service-tiles, search, module-config, multi-bundle,
    /// nested-navigation, full, or migration.
    #[arg(value_name = "TYPE")]
    pub example_type: String,

    /// Bundle the example is meant for; echoed as context.
    #[arg(long)]
    pub bundle: Option<String>,
}

/// Execute the examples subcommand.
pub fn run_examples(args: &ExamplesArgs) -> ToolReport {
    let bundle = args.bundle.as_deref();
    let body = match args.example_type.parse::<ExampleKind>() {
        Ok(kind) => example_text(kind, bundle),
        Err(e) => {
            tracing::debug!(error = %e, "unknown example type");
            unknown_type_text(&args.example_type, bundle)
        }
    };
    ToolReport::ok(format!("# FEO Examples: {}\n\n{body}", args.example_type))
}

fn example_text(kind: ExampleKind, bundle: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(bundle) = bundle {
        out.push_str(&format!("Bundle context: {bundle}\n\n"));
    }
    out.push_str(&format!(
        "{}. The key `spec` sections you need:\n\n```yaml\n{}\n```\n\n",
        example_summary(kind),
        quick_reference(kind)
    ));
    out.push_str(
        "Related commands:\n\
         - `feo migration-template` - generate a migration fragment for your app\n\
         - `feo setup-template` - generate a complete frontend.yaml\n\
         - `feo schema` - view the complete schema\n\
         - `feo field-recommendations` - field-specific guidance",
    );
    out
}

fn unknown_type_text(requested: &str, bundle: Option<&str>) -> String {
    let mut out = format!("Unknown example type: {requested}\n\nAvailable example types:\n");
    for kind in ExampleKind::ALL {
        out.push_str(&format!("- **{kind}**: {}\n", example_summary(kind)));
    }
    if let Some(bundle) = bundle {
        out.push_str(&format!("\nNote: requested bundle context: {bundle}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(kind: &str, bundle: Option<&str>) -> ExamplesArgs {
        ExamplesArgs {
            example_type: kind.to_string(),
            bundle: bundle.map(str::to_string),
        }
    }

    #[test]
    fn known_type_shows_its_snippet() {
        let report = run_examples(&args("service-tiles", Some("openshift")));
        assert!(!report.is_error);
        assert!(report.text.starts_with("# FEO Examples: service-tiles\n\n"));
        assert!(report.text.contains("Bundle context: openshift"));
        assert!(report.text.contains("```yaml\nserviceTiles:"));
    }

    #[test]
    fn unknown_type_lists_every_kind() {
        let report = run_examples(&args("widgets", None));
        assert!(report.text.contains("Unknown example type: widgets"));
        for kind in ExampleKind::ALL {
            assert!(report.text.contains(&format!("- **{kind}**")));
        }
    }
}
