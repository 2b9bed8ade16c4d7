//! Domain models for the records console.
//!
//! These are the values the payroll engine, delete guards and statistics
//! produce. Persisted rows live in [`crate::entities`].

mod deletion;
mod pay_period;
mod payroll;
mod project_stats;

pub use deletion::{BlockReason, EmployeeDeletion, ProjectDeletion};
pub use pay_period::PayPeriod;
pub use payroll::{PayrollEntry, PayrollHistoryRow, PayrollRun, Withholding};
pub use project_stats::ProjectStats;

pub use crate::entities::{MilestoneStatus, RateType};
