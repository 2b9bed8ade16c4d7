//! Organizational records console.
//!
//! This crate keeps employees, projects, assignments, hourly contracts,
//! time entries and payroll history in a relational store, guards deletes
//! against dangling leadership references, and runs an idempotent monthly
//! payroll with fixed withholding rates.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod db;
#[allow(missing_docs)]
pub mod entities;
pub mod error;
pub mod models;
pub mod services;
