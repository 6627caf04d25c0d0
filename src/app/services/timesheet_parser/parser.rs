//! Core timesheet parser
//!
//! Drives a small line scanner through three states: the employee header,
//! a section date line, and the entry lines under that date. The first
//! violation in document order ends the parse.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use super::entry::{parse_entry_line, parse_section_header};
use super::error::{Result, TimesheetParseError};
use super::header::EmployeeHeaderBuilder;
use super::lines::{is_section_start, logical_lines};
use super::resolver::{EmployeeResolution, ProjectCache, resolve_employee};
use crate::app::models::{Employee, Project, TimeEntry};

/// Parser for timesheet files
///
/// Stateless; one value can serve any number of calls, including concurrent ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimesheetParser;

/// Successful parse of one timesheet file
#[derive(Debug, Clone, Serialize)]
pub struct ParsedTimesheet {
    /// Employee every entry references
    pub employee: Arc<Employee>,

    /// What resolving the header's employee changed
    pub employee_resolution: EmployeeResolution,

    /// Entries in document order
    pub entries: Vec<TimeEntry>,

    /// Projects that did not exist before this parse
    pub new_projects: Vec<Arc<Project>>,
}

impl ParsedTimesheet {
    /// Distinct section dates in ascending order
    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        self.entries.iter().map(|entry| entry.date).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TimesheetParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse timesheet text, resolving against existing employees and projects
    pub fn parse(
        &self,
        text: &str,
        existing_employees: &[Arc<Employee>],
        existing_projects: &[Arc<Project>],
    ) -> Result<ParsedTimesheet> {
        let mut scanner = Scanner::new(existing_employees, existing_projects);
        for line in logical_lines(text) {
            scanner.feed(line)?;
        }
        scanner.finish()
    }
}

enum ScanState {
    /// Collecting `KEY: VALUE` lines
    Header(EmployeeHeaderBuilder),

    /// Reading entry lines below a section date
    Entries { date: NaiveDate, count: usize },
}

/// Resolved employee and project lookup, available once the header is complete
struct Resolved {
    employee: Arc<Employee>,
    resolution: EmployeeResolution,
    projects: ProjectCache,
}

struct Scanner<'a> {
    existing_employees: &'a [Arc<Employee>],
    existing_projects: &'a [Arc<Project>],
    state: ScanState,
    resolved: Option<Resolved>,
    entries: Vec<TimeEntry>,
}

impl<'a> Scanner<'a> {
    fn new(existing_employees: &'a [Arc<Employee>], existing_projects: &'a [Arc<Project>]) -> Self {
        Self {
            existing_employees,
            existing_projects,
            state: ScanState::Header(EmployeeHeaderBuilder::new()),
            resolved: None,
            entries: Vec::new(),
        }
    }

    fn feed(&mut self, line: &str) -> Result<()> {
        let state = std::mem::replace(&mut self.state, ScanState::Entries {
            date: NaiveDate::MIN,
            count: 0,
        });

        self.state = match state {
            ScanState::Header(mut header) if !is_section_start(line) => {
                header.parse_line(line)?;
                ScanState::Header(header)
            }
            ScanState::Header(header) => {
                let header = header.build()?;
                let (employee, resolution) = resolve_employee(&header, self.existing_employees);
                self.resolved = Some(Resolved {
                    employee,
                    resolution,
                    projects: ProjectCache::seeded(self.existing_projects),
                });
                open_section(line)?
            }
            ScanState::Entries { count: 0, .. } if is_section_start(line) => {
                return Err(TimesheetParseError::EmptyTimesheetSection);
            }
            ScanState::Entries { .. } if is_section_start(line) => open_section(line)?,
            ScanState::Entries { date, count } => {
                self.push_entry(date, line)?;
                ScanState::Entries {
                    date,
                    count: count + 1,
                }
            }
        };

        Ok(())
    }

    fn push_entry(&mut self, date: NaiveDate, line: &str) -> Result<()> {
        let fields = parse_entry_line(line)?;

        // Entries state is only reachable after the header resolved.
        let resolved = self
            .resolved
            .as_mut()
            .ok_or(TimesheetParseError::MissingTimesheetSection)?;

        self.entries.push(TimeEntry {
            date,
            start_time: fields.start_time,
            end_time: fields.end_time,
            description: fields.description.to_string(),
            employee: Arc::clone(&resolved.employee),
            project: resolved.projects.resolve(fields.project_code),
        });

        Ok(())
    }

    fn finish(self) -> Result<ParsedTimesheet> {
        match self.state {
            ScanState::Header(header) => {
                header.build()?;
                Err(TimesheetParseError::MissingTimesheetSection)
            }
            ScanState::Entries { count: 0, .. } => Err(TimesheetParseError::EmptyTimesheetSection),
            ScanState::Entries { .. } => {
                let resolved = self
                    .resolved
                    .ok_or(TimesheetParseError::MissingTimesheetSection)?;

                Ok(ParsedTimesheet {
                    employee: resolved.employee,
                    employee_resolution: resolved.resolution,
                    entries: self.entries,
                    new_projects: resolved.projects.into_created(),
                })
            }
        }
    }
}

fn open_section(line: &str) -> Result<ScanState> {
    let date = parse_section_header(line)?;
    Ok(ScanState::Entries { date, count: 0 })
}
