//! # Validate Subcommand
//!
//! `feo validate <FILE>` checks a `frontend.yaml` against the cached schema.
//! Pass `-` to read the document from stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use feo_schema::{ConfigValidator, SchemaStore, ValidationOutcome};

use crate::report::ToolReport;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document to validate, or `-` for stdin.
    pub path: PathBuf,

    /// Validate against the cached schema only; never fetch.
    #[arg(long)]
    pub skip_schema_fetch: bool,
}

/// Execute the validate subcommand.
///
/// # Errors
///
/// Only when the document itself cannot be read.
pub async fn run_validate(args: &ValidateArgs, store: &SchemaStore) -> Result<ToolReport> {
    let text = read_document(&args.path)?;
    let outcome = ConfigValidator::new(store.clone())
        .validate(&text, args.skip_schema_fetch)
        .await;
    tracing::info!(
        parsed = outcome.parsed,
        valid = ?outcome.schema_valid,
        errors = outcome.errors.len(),
        "validated {}",
        args.path.display()
    );
    Ok(validation_report(&outcome))
}

fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read document from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Render a [`ValidationOutcome`].
///
/// A parse failure is an error report. A document that parses but violates
/// the schema is a normal report listing the violations.
pub fn validation_report(outcome: &ValidationOutcome) -> ToolReport {
    if !outcome.parsed {
        let message = outcome
            .errors
            .first()
            .map(|v| v.message.as_str())
            .unwrap_or("unknown parse error");
        return ToolReport::error(format!("YAML Parse Error: {message}"));
    }

    let Some(valid) = outcome.schema_valid else {
        let reason = outcome
            .advisories
            .first()
            .map(String::as_str)
            .unwrap_or("schema unavailable");
        return ToolReport::ok(format!("Warning: Schema validation skipped ({reason})"));
    };

    let mut out = format!(
        "# FEO Configuration Validation\n\n\
         ## YAML Parse: Valid YAML structure\n\n\
         ## Schema Validation: {}\n",
        if valid { "Valid" } else { "Invalid" }
    );

    if !outcome.errors.is_empty() {
        out.push_str("\n## Validation Errors:\n");
        for v in &outcome.errors {
            let path = if v.path.is_empty() { "root" } else { v.path.as_str() };
            out.push_str(&format!("- **{path}**: {}\n", v.message));
        }
    }

    if !outcome.advisories.is_empty() {
        out.push_str("\n## Additional Recommendations:\n");
        for advisory in &outcome.advisories {
            out.push_str(&format!("- {advisory}\n"));
        }
    }
    ToolReport::ok(out)
}
