use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Plain employee/project assignment, independent of hourly contracts.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "works_on")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_no: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_number: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub time_spent: Option<Decimal>,
    pub role: Option<String>,
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
