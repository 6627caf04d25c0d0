//! Timesheet import
//!
//! Begin → read → fetch existing employees and projects → parse → save the
//! employee and project deltas → clear each (employee, date) scope → write
//! entries → commit, or roll back on dry run or any failure.

use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, warn};

use super::store::TimesheetStore;
use super::summary::{ImportKind, ImportSummary};
use crate::Result;
use crate::app::adapters::filesystem::FileReader;
use crate::app::services::timesheet_parser::{EmployeeResolution, TimesheetParser};

/// Imports timesheet files, replacing stored entries of the days they cover
#[derive(Debug)]
pub struct TimesheetImporter<S> {
    reader: FileReader,
    parser: TimesheetParser,
    store: S,
}

impl<S: TimesheetStore> TimesheetImporter<S> {
    pub fn new(store: S) -> Self {
        Self {
            reader: FileReader::new(),
            parser: TimesheetParser::new(),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Import one timesheet file
    pub async fn import(&mut self, path: &Path, dry_run: bool) -> Result<ImportSummary> {
        self.store.begin_transaction()?;

        let summary = match self.import_in_transaction(path, dry_run).await {
            Ok(summary) => summary,
            Err(e) => {
                if let Err(rollback_error) = self.store.rollback_transaction() {
                    warn!("Rollback after failed timesheet import also failed: {}", rollback_error);
                }
                return Err(e);
            }
        };

        if dry_run {
            self.store.rollback_transaction()?;
            info!(
                "Dry run: {} time entries validated, transaction rolled back",
                summary.records_written
            );
        } else if let Err(e) = self.store.commit_transaction() {
            if let Err(rollback_error) = self.store.rollback_transaction() {
                warn!("Rollback after failed commit also failed: {}", rollback_error);
            }
            return Err(e);
        } else {
            info!(
                "Imported {} time entries across {} days",
                summary.records_written,
                summary.cleared_days.len()
            );
        }

        Ok(summary)
    }

    async fn import_in_transaction(&mut self, path: &Path, dry_run: bool) -> Result<ImportSummary> {
        let text = self.reader.read_all_text(path).await?;

        let existing_employees = self.store.employees()?;
        let existing_projects = self.store.projects()?;
        debug!(
            "Resolving against {} employees and {} projects",
            existing_employees.len(),
            existing_projects.len()
        );

        let parsed = self
            .parser
            .parse(&text, &existing_employees, &existing_projects)?;

        match &parsed.employee_resolution {
            EmployeeResolution::Existing => {}
            EmployeeResolution::Renamed { previous_name } => {
                info!(
                    "Renaming employee {} from '{}' to '{}'",
                    parsed.employee.employee_id, previous_name, parsed.employee.name
                );
                self.store.save_employee(&parsed.employee)?;
            }
            EmployeeResolution::Created => {
                info!(
                    "Creating employee {} '{}'",
                    parsed.employee.employee_id, parsed.employee.name
                );
                self.store.save_employee(&parsed.employee)?;
            }
        }

        if !parsed.new_projects.is_empty() {
            debug!("Creating {} projects", parsed.new_projects.len());
            self.store.save_projects(&parsed.new_projects)?;
        }

        let day_scopes: BTreeSet<_> = parsed.entries.iter().map(|entry| entry.day_scope()).collect();

        let mut summary = ImportSummary::new(ImportKind::Timesheet, dry_run);
        for (employee_id, date) in &day_scopes {
            summary.records_cleared += self.store.clear_day(employee_id, *date)?;
        }

        self.store.write_time_entries(&parsed.entries)?;

        summary.records_written = parsed.entries.len();
        summary.cleared_days = day_scopes.into_iter().collect();
        summary.employee_resolution = Some(parsed.employee_resolution);
        summary.new_projects = parsed
            .new_projects
            .iter()
            .map(|project| project.code.clone())
            .collect();

        Ok(summary)
    }
}
