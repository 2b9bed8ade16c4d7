//! Per-project statistics.

use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::config::Capabilities;
use crate::entities::{MilestoneStatus, project, project_milestone, time_entry, works_on};
use crate::error::{ConsoleError, ConsoleResult};
use crate::models::ProjectStats;

use super::sum_hours;

/// Aggregates team size, logged hours and milestone progress of a project.
///
/// Figures backed by a disabled capability are reported as zero.
pub async fn project_stats(
    db: &DatabaseConnection,
    capabilities: &Capabilities,
    project_number: i32,
) -> ConsoleResult<ProjectStats> {
    if project::Entity::find_by_id(project_number).one(db).await?.is_none() {
        return Err(ConsoleError::NotFound {
            entity: "project",
            id: project_number.to_string(),
        });
    }

    let team_count = works_on::Entity::find()
        .filter(works_on::Column::ProjectNumber.eq(project_number))
        .count(db)
        .await?;

    let total_hours = if capabilities.hr {
        sum_hours(
            db,
            Condition::all().add(time_entry::Column::ProjectNumber.eq(project_number)),
        )
        .await?
    } else {
        Decimal::ZERO
    };

    let (total_milestones, completed_milestones) = if capabilities.project_management {
        let total = project_milestone::Entity::find()
            .filter(project_milestone::Column::ProjectNumber.eq(project_number))
            .count(db)
            .await?;
        let completed = project_milestone::Entity::find()
            .filter(project_milestone::Column::ProjectNumber.eq(project_number))
            .filter(project_milestone::Column::Status.eq(MilestoneStatus::Completed))
            .count(db)
            .await?;
        (total, completed)
    } else {
        (0, 0)
    };

    Ok(ProjectStats::new(
        project_number,
        team_count,
        total_hours,
        total_milestones,
        completed_milestones,
    ))
}
