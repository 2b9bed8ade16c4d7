use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How the gross pay of a payroll row was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateType {
    /// Monthly salary from the employee's title.
    #[sea_orm(string_value = "SALARY")]
    Salary,
    /// Hours logged in the period times the contract rate.
    #[sea_orm(string_value = "HOURLY")]
    Hourly,
}

impl RateType {
    /// Returns the stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RateType::Salary => "SALARY",
            RateType::Hourly => "HOURLY",
        }
    }
}

/// Ledger of payroll runs.
///
/// The composite primary key is the uniqueness constraint on
/// (employee, year, month) that makes payroll runs idempotent.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payroll_history")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_no: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub pay_year: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub pay_month: i32,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub gross_pay: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub federal_tax: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub state_tax: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub other_tax: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub net_pay: Decimal,
    pub rate_type: RateType,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub base_rate_used: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeNo",
        to = "super::employee::Column::EmployeeNo"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_type_serializes_to_stored_value() {
        assert_eq!(
            serde_json::to_string(&RateType::Salary).unwrap(),
            "\"SALARY\""
        );
        assert_eq!(
            serde_json::to_string(&RateType::Hourly).unwrap(),
            "\"HOURLY\""
        );
    }

    #[test]
    fn test_rate_type_as_str_matches_active_enum_value() {
        assert_eq!(RateType::Salary.to_value(), RateType::Salary.as_str());
        assert_eq!(RateType::Hourly.to_value(), RateType::Hourly.as_str());
    }
}
