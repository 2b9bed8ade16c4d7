use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Hourly contract. Keyed by employee, so an employee holds at most one.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_no: i32,
    pub project_number: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub hourly_rate: Decimal,
    pub start_date: Date,
    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeNo",
        to = "super::employee::Column::EmployeeNo"
    )]
    Employee,
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectNumber",
        to = "super::project::Column::ProjectNumber"
    )]
    Project,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
