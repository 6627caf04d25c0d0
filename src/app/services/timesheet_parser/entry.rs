//! Section header and time entry line parsing
//!
//! Field checks run in a fixed order so that a line with several problems
//! always reports the same kind: field count, empty fields, start time,
//! end time, time ordering, description, project code.

use chrono::{NaiveDate, NaiveTime};

use super::error::{Result, TimesheetParseError};
use super::lines::{char_len, check_whitespace};
use crate::constants::timesheet::{
    DESCRIPTION_MAX_LEN, ENTRY_FIELD_COUNT, FIELD_SEPARATOR, PROJECT_CODE_MAX_LEN, QUOTE,
    SECTION_PREFIX,
};

/// Validated fields of one time entry line, before entity resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFields<'a> {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: &'a str,
    pub project_code: &'a str,
}

/// Parse a `TIMESHEETS: yyyy-MM-dd` line into its date
pub fn parse_section_header(line: &str) -> Result<NaiveDate> {
    check_whitespace(line)?;

    let date_text = line
        .strip_prefix(SECTION_PREFIX)
        .ok_or(TimesheetParseError::MissingTimesheetSection)?;

    parse_date(date_text)
}

/// Parse a `start;end;"description";PROJECT` line
pub fn parse_entry_line(line: &str) -> Result<EntryFields<'_>> {
    check_whitespace(line)?;

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != ENTRY_FIELD_COUNT {
        return Err(TimesheetParseError::IncorrectFieldCount);
    }

    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err(TimesheetParseError::EmptyField);
    }

    let start_time = parse_time(fields[0])?;
    let end_time = parse_time(fields[1])?;
    if end_time <= start_time {
        return Err(TimesheetParseError::EndTimeBeforeStartTime);
    }

    let description = parse_description(fields[2])?;
    let project_code = parse_project_code(fields[3])?;

    Ok(EntryFields {
        start_time,
        end_time,
        description,
        project_code,
    })
}

/// Exactly `yyyy-MM-dd` naming a real calendar day from 0001-01-01 on
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(TimesheetParseError::InvalidDate);
    }

    let year = digits(&text[0..4]);
    let month = digits(&text[5..7]);
    let day = digits(&text[8..10]);

    // Calendar years start at 0001
    if year == 0 {
        return Err(TimesheetParseError::InvalidDate);
    }

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or(TimesheetParseError::InvalidDate)
}

/// Exactly `HH:mm` on a 24-hour clock
pub fn parse_time(text: &str) -> Result<NaiveTime> {
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit());
    if !shaped {
        return Err(TimesheetParseError::InvalidTime);
    }

    let hour = digits(&text[0..2]);
    let minute = digits(&text[3..5]);

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TimesheetParseError::InvalidTime)
}

/// Strip the surrounding quotes from a description
pub fn parse_description(field: &str) -> Result<&str> {
    let description = field
        .strip_prefix(QUOTE)
        .and_then(|rest| rest.strip_suffix(QUOTE))
        .ok_or(TimesheetParseError::DescriptionNotQuoted)?;

    if char_len(description) > DESCRIPTION_MAX_LEN {
        return Err(TimesheetParseError::DescriptionTooLong);
    }

    Ok(description)
}

/// Project codes are taken verbatim and must not carry a quote at either end
pub fn parse_project_code(field: &str) -> Result<&str> {
    if field.starts_with(QUOTE) || field.ends_with(QUOTE) {
        return Err(TimesheetParseError::ProjectQuoted);
    }

    if char_len(field) > PROJECT_CODE_MAX_LEN {
        return Err(TimesheetParseError::ProjectTooLong);
    }

    Ok(field)
}

// Callers have already checked that every byte is an ASCII digit.
fn digits(text: &str) -> u32 {
    text.bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
