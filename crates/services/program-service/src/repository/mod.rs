//! Repository layer for data access.

pub mod entities;
mod program_repository;
mod user_repository;

pub use program_repository::{ProgramRepository, ProgramStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use program_repository::MockProgramRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

use common::AppError;
use sea_orm::{DbErr, SqlErr};

/// Translate a foreign-key violation into a validation error, pass anything else through.
pub(crate) fn map_foreign_key_violation(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!(%detail, "Foreign key violation");
            AppError::validation(message)
        }
        _ => AppError::from(err),
    }
}

/// Translate a unique-constraint violation into a conflict, pass anything else through.
pub(crate) fn map_unique_violation(err: DbErr, entity: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(%detail, "Unique constraint violation");
            AppError::conflict(entity)
        }
        _ => AppError::from(err),
    }
}
