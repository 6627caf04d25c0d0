//! Data models for timesheet and typed-CSV imports
//!
//! This module contains the entities produced by the parsers: employees,
//! projects and time entries from timesheet files, and typed records and
//! products from typed-CSV files.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// Timesheet Entities
// =============================================================================

/// Employee identified by a numeric employee number
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Employee {
    /// Numeric string, at most 5 ASCII digits (e.g. "4711", "0815")
    pub employee_id: String,

    /// Display name, at most 100 characters
    pub name: String,
}

impl Employee {
    pub fn new(employee_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
        }
    }

    /// Copy of this employee carrying a different display name
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            employee_id: self.employee_id.clone(),
            name: name.into(),
        }
    }
}

/// Project a time entry is booked on
///
/// Within one parse, every entry booked on the same code shares one
/// `Arc<Project>`; compare with [`Arc::ptr_eq`] to check identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Project {
    /// Free-form project code, at most 20 characters
    pub code: String,
}

impl Project {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// A single booked time span on one day
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub date: NaiveDate,
    pub start_time: NaiveTime,

    /// Always strictly after `start_time`
    pub end_time: NaiveTime,

    /// Unquoted description, at most 200 characters
    pub description: String,

    pub employee: Arc<Employee>,
    pub project: Arc<Project>,
}

impl TimeEntry {
    /// Length of the booked span
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }

    /// Key used to clear previously imported entries before writing
    pub fn day_scope(&self) -> (String, NaiveDate) {
        (self.employee.employee_id.clone(), self.date)
    }
}

// =============================================================================
// Typed-CSV Records
// =============================================================================

/// Typed value of one typed-CSV cell
///
/// Serializes as a JSON string, an exact JSON number or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Unquoted content of a `STRING(n)` column
    String(String),

    /// Value of a `DECIMAL` column
    Decimal(#[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")] Decimal),

    /// Empty value in an `OPTIONAL` column
    Null,
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            FieldValue::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// One data row of a typed-CSV file keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParsedRecord {
    values: HashMap<String, FieldValue>,
}

impl ParsedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value; a later column with the same name replaces the earlier one
    pub fn insert(&mut self, column: impl Into<String>, value: FieldValue) {
        self.values.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.values.get(column)
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }
}

impl FromIterator<(String, FieldValue)> for ParsedRecord {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Products
// =============================================================================

/// Product built from a typed-CSV record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub code: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub price_per_unit: Decimal,
}
