use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Milestone progress, stored as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum MilestoneStatus {
    #[sea_orm(string_value = "Not Started")]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[sea_orm(string_value = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    #[sea_orm(string_value = "Completed")]
    #[serde(rename = "Completed")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_milestone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub milestone_id: i32,
    pub project_number: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: MilestoneStatus,
    pub due_date: Option<Date>,
    pub completed_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectNumber",
        to = "super::project::Column::ProjectNumber"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
