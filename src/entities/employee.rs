use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An employee row. Most other tables reference it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_no: i32,
    pub employee_name: String,
    pub phone_number: Option<String>,
    pub starting_date: Option<Date>,
    pub title: Option<String>,
    pub department_name: Option<String>,
    pub division_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee_title::Entity",
        from = "Column::Title",
        to = "super::employee_title::Column::Title"
    )]
    Title,
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentName",
        to = "super::department::Column::DepartmentName"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::division::Entity",
        from = "Column::DivisionName",
        to = "super::division::Column::DivisionName"
    )]
    Division,
    #[sea_orm(has_many = "super::works_on::Entity")]
    WorksOn,
    #[sea_orm(has_many = "super::payroll_history::Entity")]
    PayrollHistory,
}

impl Related<super::employee_title::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Title.def()
    }
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::division::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Division.def()
    }
}

impl Related<super::works_on::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorksOn.def()
    }
}

impl Related<super::payroll_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PayrollHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
