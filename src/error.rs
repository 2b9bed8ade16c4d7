//! Error types for the records console.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the payroll engine, delete guards and statistics can
//! report. Store failures are classified so that unique and foreign-key
//! violations surface as [`ConsoleError::ConstraintViolation`].

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::models::BlockReason;

/// The main error type for the records console.
///
/// # Example
///
/// ```
/// use records_console::error::ConsoleError;
///
/// let error = ConsoleError::NotFound {
///     entity: "employee",
///     id: "42".to_string(),
/// };
/// assert_eq!(error.to_string(), "employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Input was malformed or a required value was missing.
    #[error("Invalid value for '{field}': {message}")]
    Validation {
        /// The offending input field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// The referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up.
        entity: &'static str,
        /// The identifier that was looked up.
        id: String,
    },

    /// An employee delete was refused because the employee holds a
    /// leadership role.
    #[error("Employee {employee_no} cannot be deleted: {}", join_reasons(.reasons))]
    BlockedDeletion {
        /// The employee whose deletion was refused.
        employee_no: i32,
        /// Every role that must be reassigned first.
        reasons: Vec<BlockReason>,
    },

    /// The store rejected a write because of a unique or foreign-key
    /// constraint. The enclosing transaction has been rolled back.
    #[error("Constraint violation: {message}")]
    ConstraintViolation {
        /// Names the blocking reference, or the message reported by the store.
        message: String,
    },

    /// The operation needs a table group this deployment does not include.
    #[error("Capability '{capability}' is disabled in this deployment")]
    CapabilityDisabled {
        /// The disabled capability.
        capability: &'static str,
    },

    /// Any other store failure.
    #[error("Database error: {0}")]
    Database(DbErr),
}

fn join_reasons(reasons: &[BlockReason]) -> String {
    reasons
        .iter()
        .map(BlockReason::description)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<DbErr> for ConsoleError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message))
            | Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                ConsoleError::ConstraintViolation { message }
            }
            _ => ConsoleError::Database(err),
        }
    }
}

/// A type alias for Results that return ConsoleError.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ConsoleError::ConfigNotFound {
            path: "/missing/console.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/console.yaml"
        );
    }

    #[test]
    fn test_validation_displays_field_and_message() {
        let error = ConsoleError::Validation {
            field: "month".to_string(),
            message: "must be between 1 and 12, got 13".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for 'month': must be between 1 and 12, got 13"
        );
    }

    #[test]
    fn test_blocked_deletion_lists_every_reason() {
        let error = ConsoleError::BlockedDeletion {
            employee_no: 7,
            reasons: vec![BlockReason::ManagesProjects, BlockReason::DepartmentHead],
        };
        assert_eq!(
            error.to_string(),
            "Employee 7 cannot be deleted: manages one or more projects, is a department head"
        );
    }

    #[test]
    fn test_capability_disabled_displays_name() {
        let error = ConsoleError::CapabilityDisabled { capability: "hr" };
        assert_eq!(
            error.to_string(),
            "Capability 'hr' is disabled in this deployment"
        );
    }

    #[test]
    fn test_unclassified_db_error_stays_database() {
        let error: ConsoleError = DbErr::Custom("connection reset".to_string()).into();
        assert!(matches!(error, ConsoleError::Database(_)));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConsoleError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_db_error() -> Result<(), DbErr> {
            Err(DbErr::RecordNotFound("employee".to_string()))
        }

        fn propagates_error() -> ConsoleResult<()> {
            returns_db_error()?;
            Ok(())
        }

        assert!(matches!(propagates_error(), Err(ConsoleError::Database(_))));
    }
}
