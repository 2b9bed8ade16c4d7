//! Referential delete guards.
//!
//! An employee who manages a project or heads a division or department
//! cannot be deleted; everything else that references the employee is
//! removed together with it. A project delete clears its dependents unless
//! an hourly contract still references the project.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::{info, warn};

use crate::config::Capabilities;
use crate::entities::{
    department, division, employee, payroll_history, project, project_employee,
    project_milestone, time_entry, works_on,
};
use crate::error::{ConsoleError, ConsoleResult};
use crate::models::{BlockReason, EmployeeDeletion, ProjectDeletion};

use super::finish;

/// Every leadership role that currently blocks deleting `employee_no`.
///
/// An empty result means the employee may be deleted.
pub async fn employee_block_reasons<C>(
    conn: &C,
    employee_no: i32,
) -> ConsoleResult<Vec<BlockReason>>
where
    C: ConnectionTrait,
{
    let mut reasons = Vec::new();

    let managed = project::Entity::find()
        .filter(project::Column::ManagerEmpNo.eq(employee_no))
        .count(conn)
        .await?;
    if managed > 0 {
        reasons.push(BlockReason::ManagesProjects);
    }

    let divisions = division::Entity::find()
        .filter(division::Column::HeadEmpNo.eq(employee_no))
        .count(conn)
        .await?;
    if divisions > 0 {
        reasons.push(BlockReason::DivisionHead);
    }

    let departments = department::Entity::find()
        .filter(department::Column::HeadEmpNo.eq(employee_no))
        .count(conn)
        .await?;
    if departments > 0 {
        reasons.push(BlockReason::DepartmentHead);
    }

    Ok(reasons)
}

/// Deletes an employee and every row that references it.
///
/// # Errors
///
/// - [`ConsoleError::NotFound`] if the employee does not exist.
/// - [`ConsoleError::BlockedDeletion`] listing every blocking role. Nothing
///   is modified in that case.
/// - [`ConsoleError::ConstraintViolation`] or [`ConsoleError::Database`] if
///   a delete fails; the transaction is rolled back.
pub async fn delete_employee(
    db: &DatabaseConnection,
    capabilities: &Capabilities,
    employee_no: i32,
) -> ConsoleResult<EmployeeDeletion> {
    let txn = db.begin().await?;
    let result = cascade_employee(&txn, capabilities, employee_no).await;
    let deletion = finish(txn, result).await?;

    info!(
        employee_no,
        works_on_removed = deletion.works_on_removed,
        hourly_contracts_removed = deletion.hourly_contracts_removed,
        time_entries_removed = deletion.time_entries_removed,
        payroll_rows_removed = deletion.payroll_rows_removed,
        "Employee deleted"
    );
    Ok(deletion)
}

async fn cascade_employee(
    txn: &DatabaseTransaction,
    capabilities: &Capabilities,
    employee_no: i32,
) -> ConsoleResult<EmployeeDeletion> {
    if employee::Entity::find_by_id(employee_no).one(txn).await?.is_none() {
        return Err(ConsoleError::NotFound {
            entity: "employee",
            id: employee_no.to_string(),
        });
    }

    let reasons = employee_block_reasons(txn, employee_no).await?;
    if !reasons.is_empty() {
        warn!(employee_no, ?reasons, "Employee delete blocked");
        return Err(ConsoleError::BlockedDeletion {
            employee_no,
            reasons,
        });
    }

    let works_on_removed = works_on::Entity::delete_many()
        .filter(works_on::Column::EmployeeNo.eq(employee_no))
        .exec(txn)
        .await?
        .rows_affected;

    let mut deletion = EmployeeDeletion {
        employee_no,
        works_on_removed,
        hourly_contracts_removed: 0,
        time_entries_removed: 0,
        payroll_rows_removed: 0,
    };

    if capabilities.hr {
        deletion.hourly_contracts_removed = project_employee::Entity::delete_many()
            .filter(project_employee::Column::EmployeeNo.eq(employee_no))
            .exec(txn)
            .await?
            .rows_affected;

        deletion.time_entries_removed = time_entry::Entity::delete_many()
            .filter(time_entry::Column::EmployeeNo.eq(employee_no))
            .exec(txn)
            .await?
            .rows_affected;

        deletion.payroll_rows_removed = payroll_history::Entity::delete_many()
            .filter(payroll_history::Column::EmployeeNo.eq(employee_no))
            .exec(txn)
            .await?
            .rows_affected;
    }

    employee::Entity::delete_by_id(employee_no).exec(txn).await?;
    Ok(deletion)
}

/// Deletes a project together with its assignments, time entries and
/// milestones.
///
/// Hourly contracts are not part of the cascade. A project that still has
/// one is rejected before anything is removed, naming the contract holders.
///
/// # Errors
///
/// - [`ConsoleError::NotFound`] if the project does not exist.
/// - [`ConsoleError::ConstraintViolation`] if an hourly contract or another
///   remaining reference blocks the delete; the transaction is rolled back.
pub async fn delete_project(
    db: &DatabaseConnection,
    capabilities: &Capabilities,
    project_number: i32,
) -> ConsoleResult<ProjectDeletion> {
    let txn = db.begin().await?;
    let result = cascade_project(&txn, capabilities, project_number).await;
    let deletion = match finish(txn, result).await {
        Ok(deletion) => deletion,
        Err(err) => {
            if matches!(err, ConsoleError::ConstraintViolation { .. }) {
                warn!(project_number, error = %err, "Project delete rolled back");
            }
            return Err(err);
        }
    };

    info!(
        project_number,
        works_on_removed = deletion.works_on_removed,
        time_entries_removed = deletion.time_entries_removed,
        milestones_removed = deletion.milestones_removed,
        "Project deleted"
    );
    Ok(deletion)
}

async fn cascade_project(
    txn: &DatabaseTransaction,
    capabilities: &Capabilities,
    project_number: i32,
) -> ConsoleResult<ProjectDeletion> {
    if project::Entity::find_by_id(project_number).one(txn).await?.is_none() {
        return Err(ConsoleError::NotFound {
            entity: "project",
            id: project_number.to_string(),
        });
    }

    if capabilities.hr {
        let contracts = project_employee::Entity::find()
            .filter(project_employee::Column::ProjectNumber.eq(project_number))
            .order_by_asc(project_employee::Column::EmployeeNo)
            .all(txn)
            .await?;
        if !contracts.is_empty() {
            let holders = contracts
                .iter()
                .map(|c| c.employee_no.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ConsoleError::ConstraintViolation {
                message: format!(
                    "project {} still has hourly contracts held by employees {}",
                    project_number, holders
                ),
            });
        }
    }

    let works_on_removed = works_on::Entity::delete_many()
        .filter(works_on::Column::ProjectNumber.eq(project_number))
        .exec(txn)
        .await?
        .rows_affected;

    let time_entries_removed = if capabilities.hr {
        time_entry::Entity::delete_many()
            .filter(time_entry::Column::ProjectNumber.eq(project_number))
            .exec(txn)
            .await?
            .rows_affected
    } else {
        0
    };

    let milestones_removed = if capabilities.project_management {
        project_milestone::Entity::delete_many()
            .filter(project_milestone::Column::ProjectNumber.eq(project_number))
            .exec(txn)
            .await?
            .rows_affected
    } else {
        0
    };

    project::Entity::delete_by_id(project_number).exec(txn).await?;

    Ok(ProjectDeletion {
        project_number,
        works_on_removed,
        time_entries_removed,
        milestones_removed,
    })
}
