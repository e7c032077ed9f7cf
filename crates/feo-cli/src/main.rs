//! # feo CLI entry point
//!
//! Parses command-line arguments, builds the schema store, and dispatches to
//! subcommand handlers. Logs go to stderr; the report goes to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use feo_cli::examples::{run_examples, ExamplesArgs};
use feo_cli::fields::{run_fields, FieldArgs};
use feo_cli::schema::{run_schema, SchemaArgs};
use feo_cli::sections::run_sections;
use feo_cli::template::{run_migration, run_setup, MigrationArgs, SetupArgs};
use feo_cli::validate::{run_validate, ValidateArgs};
use feo_cli::{source_config, ToolReport};
use feo_schema::SchemaStore;

/// FEO config assistant.
///
/// Generates and validates `deploy/frontend.yaml` files for the Frontend
/// Operator, driven by the published CRD schema.
#[derive(Parser, Debug)]
#[command(name = "feo", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print the report as JSON (`{"text": ..., "isError": ...}`).
    #[arg(long, global = true)]
    json: bool,

    /// Fetch the schema from this URL instead of the published one.
    #[arg(long, global = true)]
    schema_url: Option<String>,

    /// Read the schema from a local file instead of fetching it.
    #[arg(long, global = true)]
    schema_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the FEO schema and summarise it.
    Schema(SchemaArgs),

    /// Generate the configuration fragment and steps for one migration.
    MigrationTemplate(MigrationArgs),

    /// Generate a complete deploy/frontend.yaml.
    SetupTemplate(SetupArgs),

    /// Validate a frontend.yaml against the schema.
    Validate(ValidateArgs),

    /// Required fields, defaults, and examples for a frontendSpec field.
    FieldRecommendations(FieldArgs),

    /// How service tiles are placed in the Services dropdown.
    ServiceTilesSections,

    /// Quick-reference snippets for common configurations.
    Examples(ExamplesArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match source_config(cli.schema_url.as_deref(), cli.schema_file.clone()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };
    let source = match config.build_source() {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };
    let store = SchemaStore::new(source);
    tracing::debug!(source = store.location(), command = ?cli.command, "dispatching");

    let result: anyhow::Result<ToolReport> = match &cli.command {
        Commands::Schema(args) => Ok(run_schema(args, &store).await),
        Commands::MigrationTemplate(args) => Ok(run_migration(args, &store).await),
        Commands::SetupTemplate(args) => Ok(run_setup(args, &store).await),
        Commands::Validate(args) => run_validate(args, &store).await,
        Commands::FieldRecommendations(args) => Ok(run_fields(args, &store).await),
        Commands::ServiceTilesSections => Ok(run_sections()),
        Commands::Examples(args) => Ok(run_examples(args)),
    };

    match result.and_then(|report| Ok((report.render(cli.json)?, report.exit_code()))) {
        Ok((text, code)) => {
            println!("{text}");
            ExitCode::from(code)
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
