//! Project statistics model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated team, hours and milestone figures for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    /// The project the figures belong to.
    pub project_number: i32,
    /// Number of Works_On assignments.
    pub team_count: u64,
    /// Hours logged against the project. Zero when nothing is logged.
    pub total_hours: Decimal,
    /// Number of milestones.
    pub total_milestones: u64,
    /// Milestones with status "Completed".
    pub completed_milestones: u64,
    /// `total_milestones - completed_milestones`.
    pub remaining_milestones: u64,
}

impl ProjectStats {
    /// Builds the stats, deriving the remaining milestone count.
    pub fn new(
        project_number: i32,
        team_count: u64,
        total_hours: Decimal,
        total_milestones: u64,
        completed_milestones: u64,
    ) -> Self {
        Self {
            project_number,
            team_count,
            total_hours,
            total_milestones,
            completed_milestones,
            remaining_milestones: total_milestones.saturating_sub(completed_milestones),
        }
    }
}
