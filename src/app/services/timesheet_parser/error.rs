//! Error kinds for timesheet parsing
//!
//! Every variant has one fixed message. Callers tell failures apart by
//! variant, never by message text.

use thiserror::Error;

/// Closed set of validation failures for the timesheet format
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimesheetParseError {
    // Employee identification
    #[error("Employee ID is missing.")]
    MissingEmployeeId,

    #[error("Employee name is missing.")]
    MissingEmployeeName,

    #[error("Duplicate employee ID found.")]
    DuplicateEmployeeId,

    #[error("Duplicate employee name found.")]
    DuplicateEmployeeName,

    #[error("Employee ID exceeds maximum length of 5 characters.")]
    EmployeeIdTooLong,

    #[error("Employee name exceeds maximum length of 100 characters.")]
    EmployeeNameTooLong,

    #[error("Employee ID must be numeric.")]
    EmployeeIdNotNumeric,

    // Line format
    #[error("Invalid key-value format; missing ': ' separator.")]
    InvalidKeyValueFormat,

    #[error("Leading whitespace detected in field.")]
    LeadingWhitespace,

    #[error("Trailing whitespace detected in field.")]
    TrailingWhitespace,

    #[error("Unknown key found in the file.")]
    UnknownKey,

    #[error("Field value cannot be empty.")]
    EmptyValue,

    // Sections
    #[error("No TIMESHEETS section found in the file.")]
    MissingTimesheetSection,

    #[error("TIMESHEETS section is empty.")]
    EmptyTimesheetSection,

    #[error("Invalid date format; expected YYYY-MM-DD.")]
    InvalidDate,

    // Time entries
    #[error("Incorrect number of fields in time entry; expected 4 fields.")]
    IncorrectFieldCount,

    #[error("One or more fields in time entry are empty.")]
    EmptyField,

    #[error("Invalid time format; expected HH:MM.")]
    InvalidTime,

    #[error("End time is before start time.")]
    EndTimeBeforeStartTime,

    #[error("Description field must be enclosed in double quotes.")]
    DescriptionNotQuoted,

    #[error("Description exceeds maximum length of 200 characters.")]
    DescriptionTooLong,

    #[error("Project code exceeds maximum length of 20 characters.")]
    ProjectTooLong,

    #[error("Project code must not be quoted.")]
    ProjectQuoted,
}

pub type Result<T> = std::result::Result<T, TimesheetParseError>;
