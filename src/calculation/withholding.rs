//! Tax withholding calculation.
//!
//! Each withheld component is rounded to cents on its own before it is
//! subtracted from gross, so net pay can differ by a cent from rounding
//! `gross * 0.82` once.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Withholding;

/// Federal withholding rate (10%).
pub const FEDERAL_TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// State withholding rate (5%).
pub const STATE_TAX_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Other withholding rate (3%).
pub const OTHER_TAX_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Rounds a monetary amount to cents, halves away from zero.
///
/// # Examples
///
/// ```
/// use records_console::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("46.875").unwrap()), Decimal::from_str("46.88").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("-0.005").unwrap()), Decimal::from_str("-0.01").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Splits a gross amount into federal, state and other tax plus net pay.
///
/// # Examples
///
/// ```
/// use records_console::calculation::compute_withholding;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let w = compute_withholding(Decimal::from_str("937.50").unwrap());
/// assert_eq!(w.federal_tax, Decimal::from_str("93.75").unwrap());
/// assert_eq!(w.state_tax, Decimal::from_str("46.88").unwrap());
/// assert_eq!(w.other_tax, Decimal::from_str("28.13").unwrap());
/// assert_eq!(w.net_pay, Decimal::from_str("768.74").unwrap());
/// ```
pub fn compute_withholding(gross_pay: Decimal) -> Withholding {
    let federal_tax = round_currency(gross_pay * FEDERAL_TAX_RATE);
    let state_tax = round_currency(gross_pay * STATE_TAX_RATE);
    let other_tax = round_currency(gross_pay * OTHER_TAX_RATE);
    let net_pay = round_currency(gross_pay - federal_tax - state_tax - other_tax);

    Withholding {
        gross_pay,
        federal_tax,
        state_tax,
        other_tax,
        net_pay,
    }
}
