use crate::domain::errors::DomainError;

/// Convert a driver error into a store failure. Messages are passed through
/// as-is.
pub(super) fn map_sqlx(err: sqlx::Error) -> DomainError {
    let message = match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        scan @ (sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_)) => format!("failed to scan row: {scan}"),
        sqlx::Error::PoolTimedOut => "timed out waiting for a database connection".into(),
        sqlx::Error::PoolClosed => "database connection pool is closed".into(),
        other => other.to_string(),
    };
    DomainError::Persistence(message)
}
