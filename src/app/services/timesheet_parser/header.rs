//! Employee header section parsing
//!
//! The header is a run of `KEY: VALUE` lines before the first `TIMESHEETS:`
//! line. Only `EMP-ID` and `EMP-NAME` are recognized and each may appear once.

use super::error::{Result, TimesheetParseError};
use super::lines::{char_len, check_whitespace};
use crate::constants::timesheet::{
    EMPLOYEE_ID_KEY, EMPLOYEE_ID_MAX_LEN, EMPLOYEE_NAME_KEY, EMPLOYEE_NAME_MAX_LEN,
    KEY_VALUE_SEPARATOR,
};

/// Employee identity read from the header section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeHeader {
    pub employee_id: String,
    pub employee_name: String,
}

/// Builder collecting header lines until the first section starts
#[derive(Debug, Default)]
pub struct EmployeeHeaderBuilder {
    employee_id: Option<String>,
    employee_name: Option<String>,
}

impl EmployeeHeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate one header line and record its value
    pub fn parse_line(&mut self, line: &str) -> Result<()> {
        check_whitespace(line)?;

        let (key, value) = line
            .split_once(KEY_VALUE_SEPARATOR)
            .ok_or(TimesheetParseError::InvalidKeyValueFormat)?;

        if value.trim().is_empty() {
            return Err(TimesheetParseError::EmptyValue);
        }

        match key {
            EMPLOYEE_ID_KEY => {
                if self.employee_id.is_some() {
                    return Err(TimesheetParseError::DuplicateEmployeeId);
                }
                validate_employee_id(value)?;
                self.employee_id = Some(value.to_string());
            }
            EMPLOYEE_NAME_KEY => {
                if self.employee_name.is_some() {
                    return Err(TimesheetParseError::DuplicateEmployeeName);
                }
                validate_employee_name(value)?;
                self.employee_name = Some(value.to_string());
            }
            _ => return Err(TimesheetParseError::UnknownKey),
        }

        Ok(())
    }

    /// Finish the header; both keys must have been seen
    pub fn build(self) -> Result<EmployeeHeader> {
        let employee_id = self
            .employee_id
            .ok_or(TimesheetParseError::MissingEmployeeId)?;
        let employee_name = self
            .employee_name
            .ok_or(TimesheetParseError::MissingEmployeeName)?;

        Ok(EmployeeHeader {
            employee_id,
            employee_name,
        })
    }
}

fn validate_employee_id(value: &str) -> Result<()> {
    if char_len(value) > EMPLOYEE_ID_MAX_LEN {
        return Err(TimesheetParseError::EmployeeIdTooLong);
    }

    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(TimesheetParseError::EmployeeIdNotNumeric);
    }

    Ok(())
}

fn validate_employee_name(value: &str) -> Result<()> {
    if char_len(value) > EMPLOYEE_NAME_MAX_LEN {
        return Err(TimesheetParseError::EmployeeNameTooLong);
    }

    Ok(())
}
