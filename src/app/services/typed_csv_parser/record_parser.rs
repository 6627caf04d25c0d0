//! Data row parsing for typed-CSV files
//!
//! Converts one raw row into a [`ParsedRecord`] according to the declared
//! columns. Checks per value run in column order: presence, then type.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::column::{ColumnDefinition, ColumnType};
use super::error::{FileParseError, Result};
use super::scanner::split_values;
use crate::app::models::{FieldValue, ParsedRecord};
use crate::constants::typed_csv::QUOTE;

/// Parse a single data row against the header's columns
pub fn parse_data_row(line: &str, columns: &[ColumnDefinition]) -> Result<ParsedRecord> {
    let values = split_values(line);
    if values.len() != columns.len() {
        return Err(FileParseError::MissingColumn);
    }

    let mut record = ParsedRecord::new();
    for (column, value) in columns.iter().zip(values) {
        record.insert(column.name.as_str(), parse_value(value, column)?);
    }

    Ok(record)
}

/// Parse one raw value for its column
pub fn parse_value(value: &str, column: &ColumnDefinition) -> Result<FieldValue> {
    if value.is_empty() && column.is_mandatory {
        return Err(FileParseError::MissingColumn);
    }

    match column.column_type {
        ColumnType::String { .. } if value.is_empty() => Ok(FieldValue::Null),
        ColumnType::String { max_length } => {
            parse_string_value(value, max_length).map(|text| FieldValue::String(text.to_string()))
        }
        // An empty optional decimal is not a number either
        ColumnType::Decimal => parse_decimal_value(value).map(FieldValue::Decimal),
    }
}

/// Unquote a `STRING(n)` value and enforce its maximum length
///
/// Overlong text is reported as `WrongDataType`.
pub fn parse_string_value(value: &str, max_length: usize) -> Result<&str> {
    let unquoted = value
        .strip_prefix(QUOTE)
        .and_then(|rest| rest.strip_suffix(QUOTE))
        .ok_or(FileParseError::MissingQuotes)?;

    if unquoted.chars().count() > max_length {
        return Err(FileParseError::WrongDataType);
    }

    Ok(unquoted)
}

/// Parse an unquoted invariant-culture decimal such as `699.99`, `-5`, `5-` or `.5`
///
/// Surrounding whitespace and one sign, leading or trailing, are accepted.
/// Exponents, digit separators and quoted values are not.
pub fn parse_decimal_value(value: &str) -> Result<Decimal> {
    if value.starts_with(QUOTE) || value.ends_with(QUOTE) {
        return Err(FileParseError::WrongDataType);
    }

    let (negative, unsigned) = split_sign(value.trim());

    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction)
    {
        return Err(FileParseError::WrongDataType);
    }

    let mut normalized = String::with_capacity(unsigned.len() + 2);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if integer.is_empty() { "0" } else { integer });
    if !fraction.is_empty() {
        normalized.push('.');
        normalized.push_str(fraction);
    }

    Decimal::from_str(&normalized).map_err(|_| FileParseError::WrongDataType)
}

/// Split off a single leading or trailing `+`/`-`
fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else if let Some(rest) = text.strip_suffix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_suffix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}
