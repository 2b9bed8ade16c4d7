//! Payroll result models.
//!
//! [`Withholding`] is the arithmetic result for one gross amount,
//! [`PayrollEntry`] a row created by a payroll run, and
//! [`PayrollHistoryRow`] a stored row joined with its employee's name.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::{RateType, payroll_history};

use super::PayPeriod;

/// Gross pay split into the fixed tax components and net pay.
///
/// Every amount carries at most two decimal places and
/// `federal_tax + state_tax + other_tax + net_pay == gross_pay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withholding {
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// Federal withholding (10% of gross).
    pub federal_tax: Decimal,
    /// State withholding (5% of gross).
    pub state_tax: Decimal,
    /// Other withholding (3% of gross).
    pub other_tax: Decimal,
    /// Gross less the three withheld components.
    pub net_pay: Decimal,
}

impl Withholding {
    /// Sum of the three withheld components.
    pub fn total_tax(&self) -> Decimal {
        self.federal_tax + self.state_tax + self.other_tax
    }
}

/// A payroll row created by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// The employee paid.
    pub employee_no: i32,
    /// The pay year.
    pub pay_year: i32,
    /// The pay month.
    pub pay_month: i32,
    /// Salary or hourly.
    pub rate_type: RateType,
    /// Monthly salary or hourly rate the gross was derived from.
    pub base_rate_used: Decimal,
    /// Hours logged in the period, for hourly rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<Decimal>,
    /// Gross, withheld and net amounts.
    pub withholding: Withholding,
}

impl PayrollEntry {
    /// Converts the entry into an active model ready for insertion.
    pub fn to_active_model(&self) -> payroll_history::ActiveModel {
        use sea_orm::ActiveValue::Set;

        payroll_history::ActiveModel {
            employee_no: Set(self.employee_no),
            pay_year: Set(self.pay_year),
            pay_month: Set(self.pay_month),
            gross_pay: Set(self.withholding.gross_pay),
            federal_tax: Set(self.withholding.federal_tax),
            state_tax: Set(self.withholding.state_tax),
            other_tax: Set(self.withholding.other_tax),
            net_pay: Set(self.withholding.net_pay),
            rate_type: Set(self.rate_type),
            base_rate_used: Set(self.base_rate_used),
        }
    }
}

/// Outcome of one payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// The period the run covered.
    pub period: PayPeriod,
    /// Rows created by this run. Rows that already existed are not included.
    pub entries: Vec<PayrollEntry>,
}

impl PayrollRun {
    /// Number of payroll rows the run created.
    pub fn created_count(&self) -> usize {
        self.entries.len()
    }
}

/// A stored payroll row together with the employee's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollHistoryRow {
    /// The employee paid.
    pub employee_no: i32,
    /// The employee's name at listing time.
    pub employee_name: String,
    /// The pay year.
    pub pay_year: i32,
    /// The pay month.
    pub pay_month: i32,
    /// Salary or hourly.
    pub rate_type: RateType,
    /// Monthly salary or hourly rate the gross was derived from.
    pub base_rate_used: Decimal,
    /// Gross, withheld and net amounts.
    pub withholding: Withholding,
}

impl PayrollHistoryRow {
    /// Joins a stored payroll row with the name of its employee.
    pub fn new(row: payroll_history::Model, employee_name: String) -> Self {
        Self {
            employee_no: row.employee_no,
            employee_name,
            pay_year: row.pay_year,
            pay_month: row.pay_month,
            rate_type: row.rate_type,
            base_rate_used: row.base_rate_used,
            withholding: Withholding {
                gross_pay: row.gross_pay,
                federal_tax: row.federal_tax,
                state_tax: row.state_tax,
                other_tax: row.other_tax,
                net_pay: row.net_pay,
            },
        }
    }
}
