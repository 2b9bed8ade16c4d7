//! Request types for the records console API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /payroll/run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRunRequest {
    /// The pay year.
    pub year: i32,
    /// The pay month, 1 through 12.
    pub month: u32,
}

/// Query string of `GET /payroll/history`.
///
/// Both values must be given together to filter to one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// Pay year filter.
    pub year: Option<i32>,
    /// Pay month filter.
    pub month: Option<u32>,
}

impl HistoryQuery {
    /// Resolves the filter, or names the half that is missing.
    pub fn period(&self) -> Result<Option<(i32, u32)>, &'static str> {
        match (self.year, self.month) {
            (Some(year), Some(month)) => Ok(Some((year, month))),
            (None, None) => Ok(None),
            (Some(_), None) => Err("month"),
            (None, Some(_)) => Err("year"),
        }
    }
}
