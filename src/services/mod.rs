//! Store-backed operations of the records console.
//!
//! Each mutating operation takes a [`sea_orm::DatabaseConnection`], opens its
//! own transaction, passes the [`DatabaseTransaction`] explicitly to every step
//! and commits or rolls back exactly once. Read-only operations query the
//! connection directly.

mod guard;
mod payroll;
mod stats;

pub use guard::{delete_employee, delete_project, employee_block_reasons};
pub use payroll::{payroll_history, run_payroll};
pub use stats::project_stats;

use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    Condition, ConnectionTrait, DatabaseTransaction, EntityTrait, QueryFilter, QuerySelect,
};
use tracing::warn;

use crate::config::Capabilities;
use crate::entities::time_entry;
use crate::error::{ConsoleError, ConsoleResult};

/// Commits on success, rolls back on failure, and hands back the result.
async fn finish<T>(txn: DatabaseTransaction, result: ConsoleResult<T>) -> ConsoleResult<T> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "Transaction rollback failed");
            }
            Err(err)
        }
    }
}

fn require_hr(capabilities: &Capabilities) -> ConsoleResult<()> {
    if capabilities.hr {
        Ok(())
    } else {
        Err(ConsoleError::CapabilityDisabled { capability: "hr" })
    }
}

/// Sum of `time_entry.hours` matching `condition`; zero when nothing matches.
async fn sum_hours<C>(conn: &C, condition: Condition) -> ConsoleResult<Decimal>
where
    C: ConnectionTrait,
{
    let total = time_entry::Entity::find()
        .select_only()
        .column_as(Expr::col(time_entry::Column::Hours).sum(), "total_hours")
        .filter(condition)
        .into_tuple::<Option<Decimal>>()
        .one(conn)
        .await?
        .flatten();

    Ok(total.unwrap_or(Decimal::ZERO))
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Seed helpers shared by the service tests.

    use std::str::FromStr;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

    use crate::config::{Capabilities, DatabaseConfig};
    use crate::db;
    use crate::entities::{
        MilestoneStatus, department, division, employee, employee_title, payroll_history,
        project, project_employee, project_milestone, time_entry, works_on,
    };

    pub const MANAGER: i32 = 100;
    pub const PROJECT: i32 = 10;

    pub fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Empty schema with the given capabilities.
    pub async fn empty_db(capabilities: Capabilities) -> DatabaseConnection {
        let db = db::connect(&DatabaseConfig::default()).await.unwrap();
        db::create_schema(&db, &capabilities).await.unwrap();
        db
    }

    /// Titles, one division, one department, a manager and project 10.
    pub async fn seeded_db(capabilities: Capabilities) -> DatabaseConnection {
        let db = empty_db(capabilities).await;
        insert_title(&db, "Engineer", Some("5000.00")).await;
        insert_title(&db, "Contractor", None).await;

        division::Entity::insert(division::ActiveModel {
            division_name: Set("Engineering".to_string()),
            head_emp_no: Set(None),
        })
        .exec_without_returning(&db)
        .await
        .unwrap();

        department::Entity::insert(department::ActiveModel {
            department_name: Set("Platform".to_string()),
            budget: Set(Some(dec("250000.00"))),
            division_name: Set("Engineering".to_string()),
            head_emp_no: Set(None),
        })
        .exec_without_returning(&db)
        .await
        .unwrap();

        insert_employee(&db, MANAGER, "Grace Manager", Some("Engineer")).await;
        insert_project(&db, PROJECT, MANAGER).await;
        db
    }

    pub async fn insert_title(db: &DatabaseConnection, title: &str, salary: Option<&str>) {
        employee_title::Entity::insert(employee_title::ActiveModel {
            title: Set(title.to_string()),
            salary: Set(salary.map(dec)),
        })
        .exec_without_returning(db)
        .await
        .unwrap();
    }

    pub async fn insert_employee(
        db: &DatabaseConnection,
        employee_no: i32,
        name: &str,
        title: Option<&str>,
    ) {
        employee::Entity::insert(employee::ActiveModel {
            employee_no: Set(employee_no),
            employee_name: Set(name.to_string()),
            phone_number: Set(None),
            starting_date: Set(Some(date(2020, 1, 6))),
            title: Set(title.map(str::to_string)),
            department_name: Set(Some("Platform".to_string())),
            division_name: Set(Some("Engineering".to_string())),
        })
        .exec_without_returning(db)
        .await
        .unwrap();
    }

    pub async fn insert_project(db: &DatabaseConnection, project_number: i32, manager: i32) {
        project::Entity::insert(project::ActiveModel {
            project_number: Set(project_number),
            budget: Set(Some(dec("80000.00"))),
            date_started: Set(Some(date(2024, 1, 1))),
            date_ended: Set(None),
            department_name: Set("Platform".to_string()),
            manager_emp_no: Set(manager),
        })
        .exec_without_returning(db)
        .await
        .unwrap();
    }

    pub async fn insert_works_on(db: &DatabaseConnection, employee_no: i32, project_number: i32) {
        works_on::Entity::insert(works_on::ActiveModel {
            employee_no: Set(employee_no),
            project_number: Set(project_number),
            time_spent: Set(Some(dec("12.50"))),
            role: Set(Some("Developer".to_string())),
        })
        .exec_without_returning(db)
        .await
        .unwrap();
    }

    pub async fn insert_contract(
        db: &DatabaseConnection,
        employee_no: i32,
        project_number: i32,
        rate: &str,
    ) {
        project_employee::Entity::insert(project_employee::ActiveModel {
            employee_no: Set(employee_no),
            project_number: Set(project_number),
            hourly_rate: Set(dec(rate)),
            start_date: Set(date(2024, 1, 1)),
            end_date: Set(None),
        })
        .exec_without_returning(db)
        .await
        .unwrap();
    }

    pub async fn insert_time_entry(
        db: &DatabaseConnection,
        employee_no: i32,
        project_number: i32,
        work_date: NaiveDate,
        hours: &str,
    ) {
        time_entry::Entity::insert(time_entry::ActiveModel {
            employee_no: Set(employee_no),
            project_number: Set(project_number),
            work_date: Set(work_date),
            hours: Set(dec(hours)),
            ..Default::default()
        })
        .exec_without_returning(db)
        .await
        .unwrap();
    }

    pub async fn insert_milestone(
        db: &DatabaseConnection,
        project_number: i32,
        title: &str,
        status: MilestoneStatus,
    ) {
        project_milestone::Entity::insert(project_milestone::ActiveModel {
            project_number: Set(project_number),
            title: Set(title.to_string()),
            description: Set(None),
            status: Set(status),
            due_date: Set(Some(date(2024, 6, 30))),
            completed_date: Set(None),
            ..Default::default()
        })
        .exec_without_returning(db)
        .await
        .unwrap();
    }

    pub async fn payroll_rows(db: &DatabaseConnection) -> Vec<payroll_history::Model> {
        payroll_history::Entity::find().all(db).await.unwrap()
    }
}
