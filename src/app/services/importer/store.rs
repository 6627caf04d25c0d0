//! Persistence seams used by the importers
//!
//! Stores are synchronous. Every write happens between
//! [`TransactionalStore::begin_transaction`] and either commit or rollback.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::Result;
use crate::app::models::{Employee, Product, Project, TimeEntry};

/// Store with a single active transaction at a time
pub trait TransactionalStore {
    fn begin_transaction(&mut self) -> Result<()>;

    fn commit_transaction(&mut self) -> Result<()>;

    /// Discard the active transaction; a no-op when none is active
    fn rollback_transaction(&mut self) -> Result<()>;
}

/// Persistence for employees, projects and time entries
pub trait TimesheetStore: TransactionalStore {
    fn employees(&self) -> Result<Vec<Arc<Employee>>>;

    fn projects(&self) -> Result<Vec<Arc<Project>>>;

    /// Insert or rename the employee with this ID
    fn save_employee(&mut self, employee: &Employee) -> Result<()>;

    fn save_projects(&mut self, projects: &[Arc<Project>]) -> Result<()>;

    /// Delete all entries of one employee on one day, returning how many were removed
    fn clear_day(&mut self, employee_id: &str, date: NaiveDate) -> Result<usize>;

    fn write_time_entries(&mut self, entries: &[TimeEntry]) -> Result<()>;
}

/// Persistence for products
pub trait ProductStore: TransactionalStore {
    /// Delete every product, returning how many were removed
    fn clear_products(&mut self) -> Result<usize>;

    fn write_products(&mut self, products: &[Product]) -> Result<()>;
}
