//! Monthly payroll runs and payroll history.
//!
//! A run pays every salaried employee without an hourly contract and every
//! hourly contract holder for one calendar month. Re-running a month only
//! creates the rows that are still missing.

use std::collections::HashSet;

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use tracing::{debug, info};

use crate::calculation::{compute_withholding, hourly_gross, salaried_gross};
use crate::config::Capabilities;
use crate::entities::{
    RateType, employee, employee_title, payroll_history, project_employee, time_entry,
};
use crate::error::ConsoleResult;
use crate::models::{PayPeriod, PayrollEntry, PayrollHistoryRow, PayrollRun};

use super::{finish, require_hr, sum_hours};

/// Runs payroll for one calendar month.
///
/// # Errors
///
/// - [`crate::error::ConsoleError::Validation`] for an invalid month or year.
/// - [`crate::error::ConsoleError::CapabilityDisabled`] without the `hr`
///   capability.
/// - Store failures; the whole run is rolled back.
pub async fn run_payroll(
    db: &DatabaseConnection,
    capabilities: &Capabilities,
    year: i32,
    month: u32,
) -> ConsoleResult<PayrollRun> {
    require_hr(capabilities)?;
    let period = PayPeriod::for_month(year, month)?;

    let txn = db.begin().await?;
    let result = pay_period(&txn, period).await;
    let run = finish(txn, result).await?;

    info!(
        year,
        month,
        created_count = run.created_count(),
        "Payroll run completed"
    );
    Ok(run)
}

async fn pay_period(txn: &DatabaseTransaction, period: PayPeriod) -> ConsoleResult<PayrollRun> {
    let contracts = project_employee::Entity::find()
        .order_by_asc(project_employee::Column::EmployeeNo)
        .all(txn)
        .await?;
    let hourly_employees: HashSet<i32> = contracts.iter().map(|c| c.employee_no).collect();

    let mut entries = Vec::new();

    let salaried = employee::Entity::find()
        .find_also_related(employee_title::Entity)
        .order_by_asc(employee::Column::EmployeeNo)
        .all(txn)
        .await?;

    for (employee, title) in salaried {
        let Some(salary) = title.and_then(|t| t.salary) else {
            continue;
        };
        if hourly_employees.contains(&employee.employee_no) {
            debug!(
                employee_no = employee.employee_no,
                "Salaried pass skips hourly contract holder"
            );
            continue;
        }
        if already_paid(txn, employee.employee_no, &period).await? {
            debug!(employee_no = employee.employee_no, "Payroll row exists");
            continue;
        }

        let entry = PayrollEntry {
            employee_no: employee.employee_no,
            pay_year: period.year,
            pay_month: period.pay_month(),
            rate_type: RateType::Salary,
            base_rate_used: salary,
            hours: None,
            withholding: compute_withholding(salaried_gross(salary)),
        };
        if insert_entry(txn, &entry).await? {
            entries.push(entry);
        }
    }

    for contract in contracts {
        if already_paid(txn, contract.employee_no, &period).await? {
            debug!(employee_no = contract.employee_no, "Payroll row exists");
            continue;
        }

        let hours = sum_hours(
            txn,
            Condition::all()
                .add(time_entry::Column::EmployeeNo.eq(contract.employee_no))
                .add(time_entry::Column::WorkDate.gte(period.start_date))
                .add(time_entry::Column::WorkDate.lt(period.end_date)),
        )
        .await?;

        let entry = PayrollEntry {
            employee_no: contract.employee_no,
            pay_year: period.year,
            pay_month: period.pay_month(),
            rate_type: RateType::Hourly,
            base_rate_used: contract.hourly_rate,
            hours: Some(hours),
            withholding: compute_withholding(hourly_gross(hours, contract.hourly_rate)),
        };
        if insert_entry(txn, &entry).await? {
            entries.push(entry);
        }
    }

    Ok(PayrollRun { period, entries })
}

async fn already_paid(
    txn: &DatabaseTransaction,
    employee_no: i32,
    period: &PayPeriod,
) -> ConsoleResult<bool> {
    let key = (employee_no, period.year, period.pay_month());
    let existing = payroll_history::Entity::find_by_id(key).one(txn).await?;
    Ok(existing.is_some())
}

/// Inserts the row unless one already exists for its key.
///
/// Returns whether the store actually inserted it.
async fn insert_entry(txn: &DatabaseTransaction, entry: &PayrollEntry) -> ConsoleResult<bool> {
    let inserted = payroll_history::Entity::insert(entry.to_active_model())
        .on_conflict(
            OnConflict::columns([
                payroll_history::Column::EmployeeNo,
                payroll_history::Column::PayYear,
                payroll_history::Column::PayMonth,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(txn)
        .await?;

    if inserted == 0 {
        debug!(
            employee_no = entry.employee_no,
            "Concurrent run created the row first"
        );
    }
    Ok(inserted > 0)
}

/// Lists stored payroll rows joined with employee names.
///
/// Rows are ordered by year and month descending, then by employee name.
/// With `period` set only that (year, month) is listed.
pub async fn payroll_history(
    db: &DatabaseConnection,
    capabilities: &Capabilities,
    period: Option<(i32, u32)>,
) -> ConsoleResult<Vec<PayrollHistoryRow>> {
    require_hr(capabilities)?;

    let mut query = payroll_history::Entity::find()
        .find_also_related(employee::Entity)
        .order_by_desc(payroll_history::Column::PayYear)
        .order_by_desc(payroll_history::Column::PayMonth)
        .order_by_asc(employee::Column::EmployeeName);

    if let Some((year, month)) = period {
        let period = PayPeriod::for_month(year, month)?;
        query = query
            .filter(payroll_history::Column::PayYear.eq(period.year))
            .filter(payroll_history::Column::PayMonth.eq(period.pay_month()));
    }

    let rows = query.all(db).await?;
    Ok(rows
        .into_iter()
        .map(|(row, employee)| {
            let name = employee.map(|e| e.employee_name).unwrap_or_default();
            PayrollHistoryRow::new(row, name)
        })
        .collect())
}
