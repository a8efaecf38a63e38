//! Error handling utilities for repositories

use pitch_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Check for foreign key violation and return appropriate error or fallback
pub fn map_foreign_key_violation<F>(e: SqlxError, on_foreign_key: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_foreign_key();
        }
    }
    map_db_error(e)
}

/// Map errors of an insert or update: duplicates and dangling references
pub fn map_write_error<U>(e: SqlxError, on_unique: U) -> DomainError
where
    U: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
        if db_err.is_foreign_key_violation() {
            return DomainError::ValidationError(format!(
                "referenced row does not exist ({})",
                db_err.constraint().unwrap_or("foreign key")
            ));
        }
        if db_err.is_check_violation() {
            return DomainError::ValidationError(format!(
                "value out of range ({})",
                db_err.constraint().unwrap_or("check")
            ));
        }
    }
    map_db_error(e)
}

/// Fallback for writes with no unique constraint of their own
pub fn unexpected_duplicate() -> DomainError {
    DomainError::InternalError("unexpected duplicate key".to_string())
}
