//! Format constants for the import file grammars
//!
//! Keywords, separators and length limits shared by the parsers, the
//! product conversion and the CLI.

// =============================================================================
// Timesheet Format
// =============================================================================

/// Timesheet file keywords and separators
pub mod timesheet {
    /// Header key carrying the employee number
    pub const EMPLOYEE_ID_KEY: &str = "EMP-ID";

    /// Header key carrying the employee display name
    pub const EMPLOYEE_NAME_KEY: &str = "EMP-NAME";

    /// Prefix that ends the header section and opens a dated section
    pub const SECTION_MARKER: &str = "TIMESHEETS:";

    /// Full section prefix including the mandatory single space
    pub const SECTION_PREFIX: &str = "TIMESHEETS: ";

    /// Separator between key and value in header lines
    pub const KEY_VALUE_SEPARATOR: &str = ": ";

    /// Separator between time entry fields
    pub const FIELD_SEPARATOR: char = ';';

    /// Number of fields in a time entry line
    pub const ENTRY_FIELD_COUNT: usize = 4;

    /// Quote character around descriptions
    pub const QUOTE: char = '"';

    pub const EMPLOYEE_ID_MAX_LEN: usize = 5;
    pub const EMPLOYEE_NAME_MAX_LEN: usize = 100;
    pub const DESCRIPTION_MAX_LEN: usize = 200;
    pub const PROJECT_CODE_MAX_LEN: usize = 20;
}

// =============================================================================
// Typed-CSV Format
// =============================================================================

/// Typed-CSV keywords and separators
pub mod typed_csv {
    /// Line separating the header block from the data block
    pub const HEADER_SEPARATOR: &str = "---";

    /// Separator between column name and column declaration
    pub const NAME_SEPARATOR: &str = ": ";

    /// Separator between data type and optionality marker
    pub const DECLARATION_SEPARATOR: &str = ", ";

    pub const STRING_TYPE_PREFIX: &str = "STRING(";
    pub const STRING_TYPE_SUFFIX: &str = ")";
    pub const DECIMAL_TYPE: &str = "DECIMAL";

    pub const MANDATORY: &str = "MANDATORY";
    pub const OPTIONAL: &str = "OPTIONAL";

    /// Delimiter between data row values
    pub const VALUE_DELIMITER: char = ',';

    /// Quote character around string values
    pub const QUOTE: char = '"';
}

// =============================================================================
// Product Import
// =============================================================================

/// Column names the product importer reads from typed-CSV records
pub mod product_columns {
    pub const PRODUCT_CODE: &str = "ProductCode";
    pub const PRODUCT_NAME: &str = "ProductName";
    pub const PRODUCT_DESCRIPTION: &str = "ProductDescription";
    pub const CATEGORY: &str = "Category";
    pub const PRICE_PER_UNIT: &str = "PricePerUnit";

    /// Columns that must exist in every record
    pub const REQUIRED: &[&str] = &[PRODUCT_CODE, PRODUCT_NAME, PRICE_PER_UNIT];
}

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Application name used for config directories
pub const APP_NAME: &str = "typed-import";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the store snapshot path
pub const ENV_STORE_PATH: &str = "TYPED_IMPORT_STORE";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "TYPED_IMPORT_LOG";

/// Default log level when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in configuration
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
