use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_number: i32,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub budget: Option<Decimal>,
    pub date_started: Option<Date>,
    pub date_ended: Option<Date>,
    pub department_name: String,
    pub manager_emp_no: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentName",
        to = "super::department::Column::DepartmentName"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::ManagerEmpNo",
        to = "super::employee::Column::EmployeeNo"
    )]
    Manager,
    #[sea_orm(has_many = "super::works_on::Entity")]
    WorksOn,
    #[sea_orm(has_many = "super::project_milestone::Entity")]
    Milestones,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manager.def()
    }
}

impl Related<super::works_on::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorksOn.def()
    }
}

impl Related<super::project_milestone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Milestones.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
