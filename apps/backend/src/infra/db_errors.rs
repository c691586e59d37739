//! SeaORM -> DomainError translation.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it here, and higher layers
//! map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail. The raw
/// driver message is logged, never returned to clients.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let raw = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %raw, "db.unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&raw, "23505")
        || raw.contains("duplicate key value violates unique constraint")
        || raw.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %raw, "db.unique_violation");
        if raw.contains("user_contents") {
            return DomainError::conflict(
                ConflictKind::Unique,
                "Content is already in this library",
            );
        }
        return DomainError::conflict(ConflictKind::Unique, "Unique constraint violation");
    }

    if mentions_sqlstate(&raw, "23503") || raw.contains("FOREIGN KEY constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %raw, "db.fk_violation");
        return DomainError::validation("Referenced record does not exist");
    }

    if raw.contains("timeout") || raw.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %raw, "db.timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %raw, "db.unhandled_error");
    DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database operation failed")
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
