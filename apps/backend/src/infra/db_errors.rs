//! SeaORM -> DomainError translation helpers.
//!
//! Repositories convert `sea_orm::DbErr` into `DomainError` here; higher
//! layers then map `DomainError` to `AppError` via `From`.

use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

fn is_check_violation(msg: &str) -> bool {
    // SQLite: "CHECK constraint failed: ..."; Postgres: SQLSTATE 23514
    msg.contains("CHECK constraint failed") || mentions_sqlstate(msg, "23514")
}

/// Map a unique-violation message to a domain conflict.
fn unique_conflict(detail: &str) -> DomainError {
    if detail.contains("users.username") || detail.contains("idx_users_username_unique") {
        DomainError::conflict(ConflictKind::UniqueUsername, "Username already exists")
    } else {
        DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        )
    }
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let trace_id = trace_ctx::trace_id();

    if let Some(sql_err) = e.sql_err() {
        return match sql_err {
            SqlErr::UniqueConstraintViolation(detail) => {
                warn!(trace_id = %trace_id, "unique constraint violation");
                unique_conflict(&detail)
            }
            SqlErr::ForeignKeyConstraintViolation(_) => {
                warn!(trace_id = %trace_id, "foreign key constraint violation");
                DomainError::conflict(
                    ConflictKind::ForeignKey,
                    "Referenced record does not exist",
                )
            }
            _ => DomainError::infra(InfraErrorKind::Other("Sql".into()), "Database error"),
        };
    }

    let error_msg = e.to_string();

    match &e {
        DbErr::RecordNotFound(_) => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
        }
        DbErr::ConnectionAcquire(_) => {
            warn!(trace_id = %trace_id, error = %error_msg, "database pool acquire failed");
            DomainError::infra(InfraErrorKind::Timeout, "Database connection timed out")
        }
        DbErr::Conn(_) => {
            error!(trace_id = %trace_id, error = %error_msg, "database connection error");
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        }
        DbErr::Exec(_) | DbErr::Query(_) if is_check_violation(&error_msg) => {
            warn!(trace_id = %trace_id, "check constraint violation");
            DomainError::validation("Value violates a check constraint")
        }
        _ => {
            error!(trace_id = %trace_id, error = %error_msg, "unclassified database error");
            DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database error")
        }
    }
}
