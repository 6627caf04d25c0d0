//! Test fixtures shared by the timesheet parser test modules

use std::sync::Arc;

use super::{ParsedTimesheet, TimesheetParseError, TimesheetParser};
use crate::app::models::{Employee, Project};


/// Two sections, seven entries, three projects
pub fn create_valid_timesheet() -> String {
    r#"EMP-ID: 4711
EMP-NAME: Rainer Stropek
TIMESHEETS: 2025-10-01
08:00;08:15;"Daily Standup Meeting";ADMIN
08:15;09:00;"Importer Implementation";ACCOUNTING
09:00;12:00;"Debugging CSS Bug";CRM
13:00;17:00;"Importer Implementation";ACCOUNTING
TIMESHEETS: 2025-10-02
08:00;08:15;"Daily Standup Meeting";ADMIN
08:15;12:00;"Open Tofu IaC Scripts";CRM
12:45;16:30;"Importer Implementation";ACCOUNTING
"#
    .to_string()
}

/// Header for employee 4711 followed by one section on 2025-10-01 holding `entry`
pub fn timesheet_with_entry(entry: &str) -> String {
    format!("EMP-ID: 4711\nEMP-NAME: Rainer Stropek\nTIMESHEETS: 2025-10-01\n{entry}\n")
}

/// Parse with no existing employees or projects
pub fn parse(text: &str) -> Result<ParsedTimesheet, TimesheetParseError> {
    TimesheetParser::new().parse(text, &[], &[])
}

/// Parse and return the error kind, failing the test on success
pub fn parse_err(text: &str) -> TimesheetParseError {
    match parse(text) {
        Ok(parsed) => panic!("expected a parse error, got {} entries", parsed.len()),
        Err(error) => error,
    }
}

pub fn employee(id: &str, name: &str) -> Arc<Employee> {
    Arc::new(Employee::new(id, name))
}

pub fn project(code: &str) -> Arc<Project> {
    Arc::new(Project::new(code))
}
