//! Calculation logic for the payroll engine.
//!
//! This module contains the pure monetary arithmetic: deriving gross pay for
//! salaried and hourly employees and splitting gross into the fixed federal,
//! state and other withholding components. Nothing here touches the store.

mod gross_pay;
mod withholding;

pub use gross_pay::{hourly_gross, salaried_gross};
pub use withholding::{
    FEDERAL_TAX_RATE, OTHER_TAX_RATE, STATE_TAX_RATE, compute_withholding, round_currency,
};
