//! Outcomes of guarded deletes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A leadership role that keeps an employee from being deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    /// The employee is `manager_emp_no` of at least one project.
    ManagesProjects,
    /// The employee heads a division.
    DivisionHead,
    /// The employee heads a department.
    DepartmentHead,
}

impl BlockReason {
    /// Human-readable description for presentation.
    pub fn description(&self) -> &'static str {
        match self {
            BlockReason::ManagesProjects => "manages one or more projects",
            BlockReason::DivisionHead => "is a division head",
            BlockReason::DepartmentHead => "is a department head",
        }
    }
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Rows removed by a successful employee delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDeletion {
    /// The deleted employee.
    pub employee_no: i32,
    /// Works_On assignments removed.
    pub works_on_removed: u64,
    /// Hourly contracts removed.
    pub hourly_contracts_removed: u64,
    /// Time entries removed.
    pub time_entries_removed: u64,
    /// Payroll history rows removed.
    pub payroll_rows_removed: u64,
}

/// Rows removed by a project delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDeletion {
    /// The deleted project.
    pub project_number: i32,
    /// Works_On assignments removed.
    pub works_on_removed: u64,
    /// Time entries removed.
    pub time_entries_removed: u64,
    /// Milestones removed.
    pub milestones_removed: u64,
}
