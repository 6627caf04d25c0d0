//! Result of one import run

use chrono::NaiveDate;
use serde::Serialize;

use crate::app::services::timesheet_parser::EmployeeResolution;

/// Which file format an import handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportKind {
    Timesheet,
    Products,
}

/// What an import wrote, or would have written on a dry run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub kind: ImportKind,

    /// Time entries or products written
    pub records_written: usize,

    /// Previously stored records deleted before writing
    pub records_cleared: usize,

    /// True when the transaction was rolled back on purpose
    pub dry_run: bool,

    /// Employee and day pairs that were replaced (timesheets only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cleared_days: Vec<(String, NaiveDate)>,

    /// How the employee was resolved (timesheets only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_resolution: Option<EmployeeResolution>,

    /// Codes of projects created by this import (timesheets only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub new_projects: Vec<String>,
}

impl ImportSummary {
    pub fn new(kind: ImportKind, dry_run: bool) -> Self {
        Self {
            kind,
            records_written: 0,
            records_cleared: 0,
            dry_run,
            cleared_days: Vec::new(),
            employee_resolution: None,
            new_projects: Vec::new(),
        }
    }

    /// True when the store was actually changed
    pub fn is_committed(&self) -> bool {
        !self.dry_run && self.records_written > 0
    }
}
