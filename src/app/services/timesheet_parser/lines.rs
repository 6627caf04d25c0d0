//! Logical line splitting and line-level checks shared by all timesheet rules

use super::error::{Result, TimesheetParseError};
use crate::constants::timesheet::SECTION_MARKER;

/// Split text on `\n` / `\r\n` and drop empty lines
///
/// A `\r` is only removed when it belongs to a `\r\n` pair. Lines holding
/// only whitespace are kept so the whitespace checks can reject them.
pub fn logical_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
        .map(|line| {
            line.strip_suffix("\r\n")
                .or_else(|| line.strip_suffix('\n'))
                .unwrap_or(line)
        })
        .filter(|line| !line.is_empty())
}

/// True for any line that opens a dated section, well-formed or not
pub fn is_section_start(line: &str) -> bool {
    line.starts_with(SECTION_MARKER)
}

/// Reject lines with leading or trailing whitespace
pub fn check_whitespace(line: &str) -> Result<()> {
    if line.chars().next().is_some_and(char::is_whitespace) {
        return Err(TimesheetParseError::LeadingWhitespace);
    }

    if line.chars().next_back().is_some_and(char::is_whitespace) {
        return Err(TimesheetParseError::TrailingWhitespace);
    }

    Ok(())
}

/// Number of characters, which is what every length limit counts
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
