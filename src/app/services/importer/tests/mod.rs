//! Test utilities for the importers
//!
//! [`RecordingStore`] wraps a [`MemoryStore`], records every store call in
//! order and can be told to fail a specific call.

use chrono::NaiveDate;
use std::cell::RefCell;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

use super::memory_store::MemoryStore;
use super::store::{ProductStore, TimesheetStore, TransactionalStore};
use crate::app::models::{Employee, Product, Project, TimeEntry};
use crate::{Error, Result};


#[derive(Debug, Default)]
pub struct RecordingStore {
    pub inner: MemoryStore,
    calls: RefCell<Vec<&'static str>>,
    fail_on: Option<&'static str>,
}

impl RecordingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn failing_on(call: &'static str) -> Self {
        Self {
            fail_on: Some(call),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }

    fn record(&self, call: &'static str) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.fail_on == Some(call) {
            return Err(Error::store(format!("{call} failed")));
        }
        Ok(())
    }
}

impl TransactionalStore for RecordingStore {
    fn begin_transaction(&mut self) -> Result<()> {
        self.record("begin")?;
        self.inner.begin_transaction()
    }

    fn commit_transaction(&mut self) -> Result<()> {
        self.record("commit")?;
        self.inner.commit_transaction()
    }

    fn rollback_transaction(&mut self) -> Result<()> {
        self.record("rollback")?;
        self.inner.rollback_transaction()
    }
}

impl TimesheetStore for RecordingStore {
    fn employees(&self) -> Result<Vec<Arc<Employee>>> {
        self.record("employees")?;
        self.inner.employees()
    }

    fn projects(&self) -> Result<Vec<Arc<Project>>> {
        self.record("projects")?;
        self.inner.projects()
    }

    fn save_employee(&mut self, employee: &Employee) -> Result<()> {
        self.record("save_employee")?;
        self.inner.save_employee(employee)
    }

    fn save_projects(&mut self, projects: &[Arc<Project>]) -> Result<()> {
        self.record("save_projects")?;
        self.inner.save_projects(projects)
    }

    fn clear_day(&mut self, employee_id: &str, date: NaiveDate) -> Result<usize> {
        self.record("clear_day")?;
        self.inner.clear_day(employee_id, date)
    }

    fn write_time_entries(&mut self, entries: &[TimeEntry]) -> Result<()> {
        self.record("write_time_entries")?;
        self.inner.write_time_entries(entries)
    }
}

impl ProductStore for RecordingStore {
    fn clear_products(&mut self) -> Result<usize> {
        self.record("clear_products")?;
        self.inner.clear_products()
    }

    fn write_products(&mut self, products: &[Product]) -> Result<()> {
        self.record("write_products")?;
        self.inner.write_products(products)
    }
}

/// Write `content` to a fresh temporary file
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub const TIMESHEET: &str = r#"EMP-ID: 4711
EMP-NAME: Rainer Stropek
TIMESHEETS: 2025-10-01
08:00;08:15;"Daily Standup Meeting";ADMIN
08:15;09:00;"Importer Implementation";ACCOUNTING
TIMESHEETS: 2025-10-02
08:00;08:15;"Daily Standup Meeting";ADMIN
"#;

pub const PRODUCTS: &str = r#"ProductCode: STRING(10), MANDATORY
ProductName: STRING(100), MANDATORY
ProductDescription: STRING(255), OPTIONAL
Category: STRING(50), OPTIONAL
PricePerUnit: DECIMAL, MANDATORY
---
"BKE0001","Mountain Bike Alpha","Entry-level hardtail mountain bike.","Mountain Bikes",699.99
"BKE0011","Replacement Screws",,,1299.00
"#;
