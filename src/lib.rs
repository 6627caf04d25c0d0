//! Typed Import Library
//!
//! Strict, line-oriented parsers for two text import formats and the
//! transactional importers that load their output into a store.
//!
//! This library provides tools for:
//! - Parsing timesheet files (employee header plus dated `TIMESHEETS:` sections)
//! - Parsing self-describing typed-CSV files (declared schema, `---`, data rows)
//! - Resolving employees and projects against existing entities without aliasing
//! - Converting typed-CSV records into products
//! - Running imports inside a transaction with dry-run support

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod importer;
        pub mod timesheet_parser;
        pub mod typed_csv_parser;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Employee, FieldValue, ParsedRecord, Product, Project, TimeEntry};
pub use app::services::importer::ProductConversionError;
pub use app::services::timesheet_parser::{TimesheetParseError, TimesheetParser};
pub use app::services::typed_csv_parser::{FileParseError, TypedCsvParser};
pub use config::Config;

/// Result type alias for import operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for reading, parsing and storing imports
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Import file does not exist
    #[error("File '{path}' not found.")]
    FileNotFound { path: String },

    /// Timesheet file content is invalid
    #[error(transparent)]
    TimesheetParse(#[from] TimesheetParseError),

    /// Typed-CSV file content is invalid
    #[error(transparent)]
    FileParse(#[from] FileParseError),

    /// Parsed record could not be turned into a product
    #[error(transparent)]
    ProductConversion(#[from] ProductConversionError),

    /// Store rejected an operation
    #[error("Store error: {message}")]
    Store { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Import was interrupted before it finished
    #[error("Import interrupted: {message}")]
    Interrupted { message: String },

    /// Serialization of a snapshot or report failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an interruption error
    pub fn interrupted(message: impl Into<String>) -> Self {
        Self::Interrupted {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// True when the failure came from one of the parsers rather than I/O or the store
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::TimesheetParse(_) | Self::FileParse(_))
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
