//! Core typed-CSV parser
//!
//! The header block declares the columns, a `---` line closes it and every
//! following line is a data row. The parser is generic: it knows nothing
//! about products or any other target type.

use super::column::{ColumnDefinition, parse_header_line};
use super::error::{FileParseError, Result};
use super::record_parser::parse_data_row;
use super::scanner::logical_lines;
use crate::app::models::ParsedRecord;
use crate::constants::typed_csv::HEADER_SEPARATOR;

/// Parser for self-describing typed-CSV files
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedCsvParser;

enum ScanState {
    /// Collecting column declarations
    Header(Vec<ColumnDefinition>),

    /// Reading rows against the declared columns
    Data(Vec<ColumnDefinition>),
}

impl TypedCsvParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse file content into one record per data row
    pub fn parse(&self, text: &str) -> Result<Vec<ParsedRecord>> {
        let lines: Vec<&str> = logical_lines(text).collect();

        // Without a separator nothing can be a header, whatever the lines hold
        if !lines.contains(&HEADER_SEPARATOR) {
            return Err(FileParseError::MissingHeader);
        }

        let mut state = ScanState::Header(Vec::new());
        let mut records = Vec::new();

        for line in lines {
            state = match state {
                ScanState::Header(columns) if line == HEADER_SEPARATOR => {
                    if columns.is_empty() {
                        return Err(FileParseError::MissingHeader);
                    }
                    ScanState::Data(columns)
                }
                ScanState::Header(mut columns) => {
                    columns.push(parse_header_line(line)?);
                    ScanState::Header(columns)
                }
                ScanState::Data(columns) => {
                    records.push(parse_data_row(line, &columns)?);
                    ScanState::Data(columns)
                }
            };
        }

        Ok(records)
    }

    /// Parse only the header block into its column declarations
    pub fn parse_columns(&self, text: &str) -> Result<Vec<ColumnDefinition>> {
        let lines: Vec<&str> = logical_lines(text).collect();
        if !lines.contains(&HEADER_SEPARATOR) {
            return Err(FileParseError::MissingHeader);
        }

        let columns = lines
            .into_iter()
            .take_while(|line| *line != HEADER_SEPARATOR)
            .map(parse_header_line)
            .collect::<Result<Vec<_>>>()?;

        if columns.is_empty() {
            return Err(FileParseError::MissingHeader);
        }

        Ok(columns)
    }
}
