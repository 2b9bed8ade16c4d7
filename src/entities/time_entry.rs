use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Hours logged by one employee on one project for one day.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "time_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub time_entry_id: i32,
    pub employee_no: i32,
    pub project_number: i32,
    pub work_date: Date,
    #[sea_orm(column_type = "Decimal(Some((6, 2)))")]
    pub hours: Decimal,
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
