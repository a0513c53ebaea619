//! Diesel and pool error classification shared by the repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{CategoryRepositoryError, QuestionRepositoryError};

use super::pool::PoolError;

/// Store-agnostic failure category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    Connection(String),
    Query(String),
    Constraint(String),
}

impl From<PoolError> for DieselFailure {
    fn from(error: PoolError) -> Self {
        match error {
            PoolError::Checkout { message } | PoolError::Build { message } => {
                Self::Connection(message)
            }
        }
    }
}

impl From<DieselError> for DieselFailure {
    fn from(error: DieselError) -> Self {
        match &error {
            DieselError::DatabaseError(kind, info) => {
                debug!(
                    ?kind,
                    message = info.message(),
                    constraint = info.constraint_name(),
                    "diesel operation failed"
                );
            }
            _ => debug!(
                error_type = %std::any::type_name_of_val(&error),
                "diesel operation failed"
            ),
        }

        match error {
            DieselError::NotFound => Self::Query("record not found".to_owned()),
            DieselError::QueryBuilderError(_) => Self::Query("database query error".to_owned()),
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
                Self::Connection("database connection error".to_owned())
            }
            DieselError::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation | DatabaseErrorKind::CheckViolation,
                info,
            ) => Self::Constraint(info.message().to_owned()),
            _ => Self::Query("database error".to_owned()),
        }
    }
}

impl From<DieselFailure> for QuestionRepositoryError {
    fn from(failure: DieselFailure) -> Self {
        match failure {
            DieselFailure::Connection(message) => Self::connection(message),
            DieselFailure::Query(message) => Self::query(message),
            DieselFailure::Constraint(message) => Self::constraint(message),
        }
    }
}

impl From<DieselFailure> for CategoryRepositoryError {
    fn from(failure: DieselFailure) -> Self {
        match failure {
            DieselFailure::Connection(message) => Self::connection(message),
            DieselFailure::Query(message) | DieselFailure::Constraint(message) => {
                Self::query(message)
            }
        }
    }
}
