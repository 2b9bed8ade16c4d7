//! Gross pay derivation for salaried and hourly employees.

use rust_decimal::Decimal;

use super::withholding::round_currency;

/// Gross pay for a salaried employee: the title's monthly salary as stored.
pub fn salaried_gross(monthly_salary: Decimal) -> Decimal {
    monthly_salary
}

/// Gross pay for an hourly employee, rounded to cents.
///
/// # Examples
///
/// ```
/// use records_console::calculation::hourly_gross;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let gross = hourly_gross(Decimal::from_str("37.5").unwrap(), Decimal::from_str("25.00").unwrap());
/// assert_eq!(gross, Decimal::from_str("937.50").unwrap());
/// ```
pub fn hourly_gross(total_hours: Decimal, hourly_rate: Decimal) -> Decimal {
    round_currency(total_hours * hourly_rate)
}
