//! Typed-CSV parser for self-describing data files
//!
//! A typed-CSV file declares its schema before the data:
//!
//! ```text
//! ProductCode: STRING(10), MANDATORY
//! PricePerUnit: DECIMAL, MANDATORY
//! ---
//! "BKE0001",699.99
//! ```
//!
//! ## Architecture
//!
//! - [`parser`] - Header/data state machine
//! - [`column`] - Column declaration parsing
//! - [`record_parser`] - Typed value conversion per data row
//! - [`scanner`] - Line splitting and quote-aware value splitting
//! - [`error`] - Closed set of error kinds
//!
//! ## Usage
//!
//! ```rust
//! use typed_import::app::services::typed_csv_parser::TypedCsvParser;
//!
//! let text = "ProductCode: STRING(10), MANDATORY\n---\n\"BKE0001\"";
//! let records = TypedCsvParser::new().parse(text).unwrap();
//! assert_eq!(records[0].get("ProductCode").and_then(|v| v.as_str()), Some("BKE0001"));
//! ```

pub mod column;
pub mod error;
pub mod parser;
pub mod record_parser;
pub mod scanner;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column::{ColumnDefinition, ColumnType};
pub use error::FileParseError;
pub use parser::TypedCsvParser;
