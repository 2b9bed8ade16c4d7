use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A job title and the monthly salary attached to it.
///
/// A title without a salary does not make its holders salaried.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_title")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub title: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub salary: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee::Entity")]
    Employees,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
