//! Entity resolution against caller-supplied employees and projects
//!
//! Inputs are never mutated. The resolver reports what changed instead:
//! whether the employee was reused, renamed or created, and which projects
//! had to be created.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use super::header::EmployeeHeader;
use crate::app::models::{Employee, Project};

/// How the header's employee relates to the existing employees
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EmployeeResolution {
    /// Found with the same name; the existing `Arc` is reused
    Existing,

    /// Found under a different name; a renamed copy is used
    Renamed { previous_name: String },

    /// Not found; a new employee was built
    Created,
}

/// Resolve the header's employee by ID (first match wins)
pub fn resolve_employee(
    header: &EmployeeHeader,
    existing_employees: &[Arc<Employee>],
) -> (Arc<Employee>, EmployeeResolution) {
    let found = existing_employees
        .iter()
        .find(|employee| employee.employee_id == header.employee_id);

    match found {
        Some(employee) if employee.name == header.employee_name => {
            (Arc::clone(employee), EmployeeResolution::Existing)
        }
        Some(employee) => (
            Arc::new(employee.renamed(header.employee_name.as_str())),
            EmployeeResolution::Renamed {
                previous_name: employee.name.clone(),
            },
        ),
        None => (
            Arc::new(Employee::new(
                header.employee_id.as_str(),
                header.employee_name.as_str(),
            )),
            EmployeeResolution::Created,
        ),
    }
}

/// Call-scoped project lookup seeded from existing projects
#[derive(Debug, Default)]
pub struct ProjectCache {
    by_code: HashMap<String, Arc<Project>>,
    created: Vec<Arc<Project>>,
}

impl ProjectCache {
    /// Seed the cache; for duplicate codes the first project is kept
    pub fn seeded(existing_projects: &[Arc<Project>]) -> Self {
        let mut by_code = HashMap::with_capacity(existing_projects.len());
        for project in existing_projects {
            by_code
                .entry(project.code.clone())
                .or_insert_with(|| Arc::clone(project));
        }

        Self {
            by_code,
            created: Vec::new(),
        }
    }

    /// Shared project for `code`, creating it on first use
    pub fn resolve(&mut self, code: &str) -> Arc<Project> {
        if let Some(project) = self.by_code.get(code) {
            return Arc::clone(project);
        }

        let project = Arc::new(Project::new(code));
        self.by_code.insert(code.to_string(), Arc::clone(&project));
        self.created.push(Arc::clone(&project));
        project
    }

    /// Projects created during this parse, in first-use order
    pub fn into_created(self) -> Vec<Arc<Project>> {
        self.created
    }
}
