//! Monthly pay period model.
//!
//! This module contains the [`PayPeriod`] type, which maps a (year, month)
//! pair onto the half-open date range used to aggregate logged hours.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ConsoleError, ConsoleResult};

/// A calendar month identified by (year, month).
///
/// `start_date` is the first day of the month and `end_date` is the first
/// day of the following month, so the period covers `[start_date, end_date)`.
///
/// # Example
///
/// ```
/// use records_console::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::for_month(2024, 12).unwrap();
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The pay year.
    pub year: i32,
    /// The pay month, 1 through 12.
    pub month: u32,
    /// First day of the month (inclusive).
    pub start_date: NaiveDate,
    /// First day of the following month (exclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Builds the pay period for a calendar month.
    ///
    /// December rolls over into January of the following year.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] if `month` is not in 1..=12 or
    /// the year cannot be represented as a calendar date.
    pub fn for_month(year: i32, month: u32) -> ConsoleResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ConsoleError::Validation {
                field: "month".to_string(),
                message: format!("must be between 1 and 12, got {}", month),
            });
        }

        let (next_year, next_month) = if month == 12 {
            (year.checked_add(1), 1)
        } else {
            (Some(year), month + 1)
        };

        let start_date = NaiveDate::from_ymd_opt(year, month, 1);
        let end_date = next_year.and_then(|y| NaiveDate::from_ymd_opt(y, next_month, 1));

        match (start_date, end_date) {
            (Some(start_date), Some(end_date)) => Ok(Self {
                year,
                month,
                start_date,
                end_date,
            }),
            _ => Err(ConsoleError::Validation {
                field: "year".to_string(),
                message: format!("{} is outside the supported calendar range", year),
            }),
        }
    }

    /// Checks whether a work date falls inside the period.
    #[cfg(test)]
    fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date < self.end_date
    }

    /// The month as stored in `payroll_history.pay_month`.
    pub fn pay_month(&self) -> i32 {
        self.month as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_for_month_mid_year() {
        let period = PayPeriod::for_month(2024, 3).unwrap();
        assert_eq!(period.start_date, date(2024, 3, 1));
        assert_eq!(period.end_date, date(2024, 4, 1));
    }

    #[test]
    fn test_for_month_december_rolls_into_next_year() {
        let period = PayPeriod::for_month(2023, 12).unwrap();
        assert_eq!(period.end_date, date(2024, 1, 1));
        assert_eq!(period.year, 2023);
        assert_eq!(period.pay_month(), 12);
    }

    #[test]
    fn test_for_month_february_leap_year() {
        let period = PayPeriod::for_month(2024, 2).unwrap();
        assert!(period.contains_date(date(2024, 2, 29)));
        assert!(!period.contains_date(date(2024, 3, 1)));
    }

    #[test]
    fn test_contains_date_is_half_open() {
        let period = PayPeriod::for_month(2024, 3).unwrap();
        assert!(period.contains_date(date(2024, 3, 1)));
        assert!(period.contains_date(date(2024, 3, 31)));
        assert!(!period.contains_date(date(2024, 2, 29)));
        assert!(!period.contains_date(date(2024, 4, 1)));
    }

    #[test]
    fn test_for_month_rejects_month_zero() {
        match PayPeriod::for_month(2024, 0) {
            Err(ConsoleError::Validation { field, .. }) => assert_eq!(field, "month"),
            other => panic!("Expected month validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_for_month_rejects_month_thirteen() {
        assert!(matches!(
            PayPeriod::for_month(2024, 13),
            Err(ConsoleError::Validation { .. })
        ));
    }

    #[test]
    fn test_for_month_rejects_unrepresentable_year() {
        match PayPeriod::for_month(i32::MAX, 12) {
            Err(ConsoleError::Validation { field, .. }) => assert_eq!(field, "year"),
            other => panic!("Expected year validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_serialize_pay_period() {
        let period = PayPeriod::for_month(2024, 3).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2024-03-01\""));
        assert!(json.contains("\"end_date\":\"2024-04-01\""));
        assert!(json.contains("\"month\":3"));
    }
}
