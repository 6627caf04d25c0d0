//! Command implementations for the typed-import CLI
//!
//! `run` sets up logging and configuration, dispatches the subcommand and
//! prints the result. `execute` does the work without touching global state.

use colored::Colorize;
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::app::adapters::filesystem::FileReader;
use crate::app::services::importer::{
    ImportKind, ImportSummary, MemoryStore, ProductImporter, TimesheetImporter,
};
use crate::app::services::timesheet_parser::{EmployeeResolution, TimesheetParser};
use crate::app::services::typed_csv_parser::TypedCsvParser;
use crate::cli::args::{Args, Commands, FileFormat, InspectArgs};
use crate::config::Config;
use crate::{Error, Result};

/// What a command produced
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// An import ran, committed or rolled back
    Imported(ImportSummary),

    /// A file was parsed without importing
    Inspected {
        document: serde_json::Value,
        compact: bool,
    },
}

/// Main command runner
///
/// 1. Validate arguments and load configuration
/// 2. Set up logging
/// 3. Execute the subcommand
/// 4. Print the outcome
pub async fn run(args: Args) -> Result<()> {
    let start_time = Instant::now();

    args.validate()?;
    let config = load_configuration(&args)?;

    setup_logging(&args, &config)?;
    debug!("Command line arguments: {:?}", args);
    debug!("Loaded configuration: {:?}", config);

    let outcome = execute(&args, &config).await?;
    info!(
        "Finished {} in {:.2?}",
        args.input_file().display(),
        start_time.elapsed()
    );

    match outcome {
        CommandOutcome::Imported(summary) => {
            if !args.quiet {
                print_import_summary(args.input_file(), &summary);
            }
        }
        CommandOutcome::Inspected { document, compact } => {
            println!("{}", render_json(&document, compact)?);
        }
    }

    Ok(())
}

/// Execute the selected subcommand against `config`
pub async fn execute(args: &Args, config: &Config) -> Result<CommandOutcome> {
    match &args.command {
        Commands::Timesheet(import) => {
            let dry_run = import.is_dry_run(config.dry_run);
            let store = open_store(config)?;
            let mut importer = TimesheetImporter::new(store);
            let summary = importer.import(&import.file, dry_run).await?;
            Ok(CommandOutcome::Imported(summary))
        }
        Commands::Products(import) => {
            let dry_run = import.is_dry_run(config.dry_run);
            let store = open_store(config)?;
            let mut importer = ProductImporter::new(store);
            let summary = importer.import(&import.file, dry_run).await?;
            Ok(CommandOutcome::Imported(summary))
        }
        Commands::Inspect(inspect) => inspect_file(inspect).await,
    }
}

/// Layer CLI flags over the loaded configuration
fn load_configuration(args: &Args) -> Result<Config> {
    let mut config = Config::load(args.config_file.as_deref())?;

    if let Some(store_path) = &args.store_path {
        config = config.with_store_path(store_path);
    }
    if let Some(level) = args.log_level_override() {
        config.log_level = level.to_string();
    }

    config.validate()?;
    Ok(config)
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the configured level.
fn setup_logging(args: &Args, config: &Config) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = config.log_level.to_ascii_lowercase();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("typed_import={}", log_level)));

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_timer(fmt::time::uptime()))
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

fn open_store(config: &Config) -> Result<MemoryStore> {
    match &config.store_path {
        Some(path) => {
            info!("Using store snapshot {}", path.display());
            MemoryStore::open(path)
        }
        None => {
            warn!("No store path configured; imported data will not be persisted");
            Ok(MemoryStore::new())
        }
    }
}

/// Parse a file against an empty store and describe the result as JSON
async fn inspect_file(inspect: &InspectArgs) -> Result<CommandOutcome> {
    let text = FileReader::new().read_all_text(&inspect.file).await?;

    let document = match inspect.format {
        FileFormat::Timesheet => {
            let parsed = TimesheetParser::new().parse(&text, &[], &[])?;
            serde_json::to_value(&parsed)?
        }
        FileFormat::TypedCsv => {
            let parser = TypedCsvParser::new();
            let columns = parser.parse_columns(&text)?;
            let records = parser.parse(&text)?;
            json!({
                "columns": columns,
                "records": records,
            })
        }
    };

    Ok(CommandOutcome::Inspected {
        document,
        compact: inspect.compact,
    })
}

fn render_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.map_err(|e| Error::serialization("Failed to render JSON output", e))
}

/// Print a human-readable import report
fn print_import_summary(file: &Path, summary: &ImportSummary) {
    let what = match summary.kind {
        ImportKind::Timesheet => "time entries",
        ImportKind::Products => "products",
    };

    let headline = if summary.dry_run {
        format!("Dry run of {} complete (rolled back)", file.display())
            .bright_yellow()
            .bold()
    } else {
        format!("Imported {}", file.display()).bright_green().bold()
    };

    println!("{}", headline);
    println!("   {} {} written", summary.records_written, what);
    println!("   {} stored records replaced", summary.records_cleared);

    if let Some(resolution) = &summary.employee_resolution {
        println!("   employee: {}", describe_resolution(resolution));
    }
    if !summary.new_projects.is_empty() {
        println!("   new projects: {}", summary.new_projects.join(", "));
    }
    if !summary.cleared_days.is_empty() {
        let days: Vec<String> = summary
            .cleared_days
            .iter()
            .map(|(employee_id, date)| format!("{} {}", employee_id, date))
            .collect();
        println!("   days: {}", days.join(", ").dimmed());
    }
}

fn describe_resolution(resolution: &EmployeeResolution) -> String {
    match resolution {
        EmployeeResolution::Existing => "existing".to_string(),
        EmployeeResolution::Renamed { previous_name } => {
            format!("renamed (was {})", previous_name)
        }
        EmployeeResolution::Created => "created".to_string(),
    }
}
