//! Persisted entity definitions for the organizational-records schema.
//!
//! Every table is a sea-orm entity. Foreign keys that form a cycle
//! (division and department heads point back at `employee`) are plain
//! columns without a store constraint; the delete guard in
//! [`crate::services`] is what keeps them consistent.

pub mod department;
pub mod division;
pub mod employee;
pub mod employee_title;
pub mod payroll_history;
pub mod project;
pub mod project_employee;
pub mod project_milestone;
pub mod time_entry;
pub mod works_on;

pub use payroll_history::RateType;
pub use project_milestone::MilestoneStatus;
