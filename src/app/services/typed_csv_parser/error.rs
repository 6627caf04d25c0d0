//! Error kinds for typed-CSV parsing

use thiserror::Error;

/// Closed set of validation failures for the typed-CSV format
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileParseError {
    // Header block
    #[error("No header section found before separator.")]
    MissingHeader,

    #[error("Invalid separator in header line; expected ': ' and ', '.")]
    HeaderFormatError,

    #[error("Data type not recognized; expected STRING(<n>) or DECIMAL.")]
    UnknownDataType,

    #[error("Optionality marker not recognized; expected MANDATORY or OPTIONAL.")]
    InvalidOptionalMarker,

    // Data block
    #[error("Data row has incorrect number of values compared to header.")]
    MissingColumn,

    #[error("String value not enclosed in double quotes.")]
    MissingQuotes,

    #[error("Value format doesn't match column type.")]
    WrongDataType,
}

pub type Result<T> = std::result::Result<T, FileParseError>;
