//! Column declarations from the typed-CSV header block
//!
//! Each header line has the shape `<name>: <type>, <optionality>` where the
//! type is `STRING(<n>)` or `DECIMAL` and the optionality is `MANDATORY` or
//! `OPTIONAL`.

use serde::Serialize;

use super::error::{FileParseError, Result};
use crate::constants::typed_csv::{
    DECIMAL_TYPE, DECLARATION_SEPARATOR, MANDATORY, NAME_SEPARATOR, OPTIONAL, STRING_TYPE_PREFIX,
    STRING_TYPE_SUFFIX,
};

/// Declared value type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnType {
    /// Quoted text of at most `max_length` characters
    String { max_length: usize },

    /// Unquoted invariant-culture decimal number
    Decimal,
}

/// One declared column, in header order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub column_type: ColumnType,
    pub is_mandatory: bool,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, column_type: ColumnType, is_mandatory: bool) -> Self {
        Self {
            name: name.into(),
            column_type,
            is_mandatory,
        }
    }
}

/// Parse one `<name>: <type>, <optionality>` header line
pub fn parse_header_line(line: &str) -> Result<ColumnDefinition> {
    let (name, declaration) = line
        .split_once(NAME_SEPARATOR)
        .ok_or(FileParseError::HeaderFormatError)?;

    let (type_text, optionality) = declaration
        .split_once(DECLARATION_SEPARATOR)
        .ok_or(FileParseError::HeaderFormatError)?;

    let column_type = parse_column_type(type_text)?;

    let is_mandatory = match optionality {
        MANDATORY => true,
        OPTIONAL => false,
        _ => return Err(FileParseError::InvalidOptionalMarker),
    };

    Ok(ColumnDefinition::new(name, column_type, is_mandatory))
}

/// `DECIMAL` or `STRING(n)` with `n` a positive integer
pub fn parse_column_type(type_text: &str) -> Result<ColumnType> {
    if type_text == DECIMAL_TYPE {
        return Ok(ColumnType::Decimal);
    }

    let length_text = type_text
        .strip_prefix(STRING_TYPE_PREFIX)
        .and_then(|rest| rest.strip_suffix(STRING_TYPE_SUFFIX))
        .ok_or(FileParseError::UnknownDataType)?;

    if length_text.is_empty() || !length_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FileParseError::UnknownDataType);
    }

    match length_text.parse::<usize>() {
        Ok(max_length) if max_length > 0 => Ok(ColumnType::String { max_length }),
        _ => Err(FileParseError::UnknownDataType),
    }
}
