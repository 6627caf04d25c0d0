//! In-memory store with snapshot transactions and optional JSON persistence
//!
//! `begin_transaction` copies the committed snapshot, writes go to the copy,
//! `commit_transaction` swaps it in and `rollback_transaction` drops it.
//! When a snapshot path is set, every commit rewrites that file.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use super::store::{ProductStore, TimesheetStore, TransactionalStore};
use crate::app::models::{Employee, Product, Project, TimeEntry};
use crate::{Error, Result};

/// Time entry as stored, referencing employee and project by key
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoredTimeEntry {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: String,
    pub employee_id: String,
    pub project_code: String,
}

impl From<&TimeEntry> for StoredTimeEntry {
    fn from(entry: &TimeEntry) -> Self {
        Self {
            date: entry.date,
            start_time: entry.start_time,
            end_time: entry.end_time,
            description: entry.description.clone(),
            employee_id: entry.employee.employee_id.clone(),
            project_code: entry.project.code.clone(),
        }
    }
}

/// Complete store contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub employees: Vec<Employee>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub time_entries: Vec<StoredTimeEntry>,

    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    committed: StoreSnapshot,
    pending: Option<StoreSnapshot>,
    snapshot_path: Option<PathBuf>,
}

impl MemoryStore {
    /// Empty store that is never persisted
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing contents
    pub fn with_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            committed: snapshot,
            ..Self::default()
        }
    }

    /// Load the snapshot at `path` if it exists and persist commits back to it
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let committed = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                Error::io(format!("Failed to read store snapshot {}", path.display()), e)
            })?;
            serde_json::from_str(&content).map_err(|e| {
                Error::serialization(
                    format!("Invalid store snapshot {}", path.display()),
                    e,
                )
            })?
        } else {
            debug!("No store snapshot at {}, starting empty", path.display());
            StoreSnapshot::default()
        };

        Ok(Self {
            committed,
            pending: None,
            snapshot_path: Some(path),
        })
    }

    /// Committed contents; uncommitted writes are not visible here
    pub fn snapshot(&self) -> &StoreSnapshot {
        &self.committed
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    pub fn in_transaction(&self) -> bool {
        self.pending.is_some()
    }

    fn current(&self) -> &StoreSnapshot {
        self.pending.as_ref().unwrap_or(&self.committed)
    }

    fn pending_mut(&mut self) -> Result<&mut StoreSnapshot> {
        self.pending
            .as_mut()
            .ok_or_else(|| Error::store("Write attempted outside a transaction"))
    }
}

fn persist(path: &Path, snapshot: &StoreSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| Error::serialization("Failed to serialize store snapshot", e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::io(format!("Failed to create directory {}", parent.display()), e)
        })?;
    }

    std::fs::write(path, json)
        .map_err(|e| Error::io(format!("Failed to write store snapshot {}", path.display()), e))
}

impl TransactionalStore for MemoryStore {
    fn begin_transaction(&mut self) -> Result<()> {
        if self.pending.is_some() {
            return Err(Error::store("A transaction is already active"));
        }
        self.pending = Some(self.committed.clone());
        Ok(())
    }

    fn commit_transaction(&mut self) -> Result<()> {
        let pending = self
            .pending
            .take()
            .ok_or_else(|| Error::store("No active transaction to commit"))?;

        if let Some(path) = &self.snapshot_path {
            persist(path, &pending)?;
            debug!("Store snapshot written to {}", path.display());
        }

        self.committed = pending;
        Ok(())
    }

    fn rollback_transaction(&mut self) -> Result<()> {
        self.pending = None;
        Ok(())
    }
}

impl TimesheetStore for MemoryStore {
    fn employees(&self) -> Result<Vec<Arc<Employee>>> {
        Ok(self
            .current()
            .employees
            .iter()
            .cloned()
            .map(Arc::new)
            .collect())
    }

    fn projects(&self) -> Result<Vec<Arc<Project>>> {
        Ok(self
            .current()
            .projects
            .iter()
            .cloned()
            .map(Arc::new)
            .collect())
    }

    fn save_employee(&mut self, employee: &Employee) -> Result<()> {
        let employees = &mut self.pending_mut()?.employees;
        match employees
            .iter()
            .position(|stored| stored.employee_id == employee.employee_id)
        {
            Some(index) => employees[index].name = employee.name.clone(),
            None => employees.push(employee.clone()),
        }
        Ok(())
    }

    fn save_projects(&mut self, projects: &[Arc<Project>]) -> Result<()> {
        let stored = &mut self.pending_mut()?.projects;
        for project in projects {
            if !stored.iter().any(|p| p.code == project.code) {
                stored.push(Project::clone(project));
            }
        }
        Ok(())
    }

    fn clear_day(&mut self, employee_id: &str, date: NaiveDate) -> Result<usize> {
        let entries = &mut self.pending_mut()?.time_entries;
        let before = entries.len();
        entries.retain(|entry| !(entry.employee_id == employee_id && entry.date == date));
        Ok(before - entries.len())
    }

    fn write_time_entries(&mut self, entries: &[TimeEntry]) -> Result<()> {
        self.pending_mut()?
            .time_entries
            .extend(entries.iter().map(StoredTimeEntry::from));
        Ok(())
    }
}

impl ProductStore for MemoryStore {
    fn clear_products(&mut self) -> Result<usize> {
        let products = &mut self.pending_mut()?.products;
        let removed = products.len();
        products.clear();
        Ok(removed)
    }

    fn write_products(&mut self, products: &[Product]) -> Result<()> {
        self.pending_mut()?.products.extend_from_slice(products);
        Ok(())
    }
}
