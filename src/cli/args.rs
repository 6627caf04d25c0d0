//! Command-line argument definitions for the typed-import tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the typed-import tool
///
/// Imports timesheet and typed-CSV product files into the store, or parses
/// them without importing to inspect the result.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "typed-import",
    version,
    about = "Validate and import timesheet and typed-CSV files",
    long_about = "Strictly validates line-oriented import files and loads them into the store \
                  inside one transaction. Timesheet imports replace the stored entries of every \
                  employee and day they cover; product imports replace the whole catalog. Any \
                  validation error aborts the import and leaves the store unchanged."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to load instead of the default location
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Configuration file (TOML)"
    )]
    pub config_file: Option<PathBuf>,

    /// JSON snapshot backing the store
    ///
    /// Overrides `store_path` from the configuration file and the
    /// TYPED_IMPORT_STORE environment variable. Without any store path the
    /// store lives in memory and nothing is persisted.
    #[arg(
        short = 's',
        long = "store",
        value_name = "FILE",
        global = true,
        help = "JSON store snapshot to read and update"
    )]
    pub store_path: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import a timesheet file, replacing the employee's entries for its days
    Timesheet(ImportArgs),

    /// Import a typed-CSV product catalog, replacing all products
    Products(ImportArgs),

    /// Parse a file without importing and print the result as JSON
    Inspect(InspectArgs),
}

/// Arguments shared by the import commands
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// File to import
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Run the whole import, then roll back instead of committing
    #[arg(long = "dry-run", help = "Validate and write, then roll back")]
    pub dry_run: bool,

    /// Commit even when the configuration asks for dry runs
    #[arg(
        long = "commit",
        conflicts_with = "dry_run",
        help = "Commit the import, overriding `dry_run = true` in the config"
    )]
    pub commit: bool,
}

impl ImportArgs {
    /// Whether to roll back, given the configured default
    pub fn is_dry_run(&self, config_default: bool) -> bool {
        if self.commit {
            false
        } else {
            self.dry_run || config_default
        }
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// File to parse
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Format of the file
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        help = "File format to parse"
    )]
    pub format: FileFormat,

    /// Print compact instead of pretty JSON
    #[arg(long = "compact", help = "Print compact JSON")]
    pub compact: bool,
}

/// Supported import file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileFormat {
    /// Employee header plus dated TIMESHEETS sections
    Timesheet,
    /// Declared columns, `---`, then comma-separated rows
    TypedCsv,
}

impl Args {
    /// Validate argument combinations that clap cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file
            && !config_file.exists()
        {
            return Err(Error::configuration(format!(
                "Config file does not exist: {}",
                config_file.display()
            )));
        }

        if let Some(store_path) = &self.store_path
            && store_path.is_dir()
        {
            return Err(Error::configuration(format!(
                "Store path is a directory: {}",
                store_path.display()
            )));
        }

        Ok(())
    }

    /// Log level from `-v`/`-q`, or `None` to use the configured default
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }

        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// File the selected command reads
    pub fn input_file(&self) -> &Path {
        match &self.command {
            Commands::Timesheet(args) | Commands::Products(args) => &args.file,
            Commands::Inspect(args) => &args.file,
        }
    }
}
