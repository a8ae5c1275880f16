use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[source] SqlxError),

    #[error("Not found")]
    NotFound,

    /// The statement referenced a row that does not exist.
    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    /// The target row is still referenced by other rows.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A value the store rejected: a failed `CHECK` or a numeric overflow.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db_err) if db_err.is_foreign_key_violation() => {
                let constraint = db_err.constraint().unwrap_or("unknown constraint");
                RepositoryError::ForeignKey(format!("{constraint}: {}", db_err.message()))
            }
            SqlxError::Database(db_err)
                if db_err.is_check_violation()
                    || db_err.code().as_deref() == Some(NUMERIC_VALUE_OUT_OF_RANGE) =>
            {
                RepositoryError::InvalidValue(db_err.message().to_string())
            }
            other => RepositoryError::Sqlx(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_becomes_not_found() {
        let err = RepositoryError::from(SqlxError::RowNotFound);
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn other_driver_errors_are_wrapped() {
        let err = RepositoryError::from(SqlxError::PoolTimedOut);
        assert!(matches!(err, RepositoryError::Sqlx(SqlxError::PoolTimedOut)));
        assert!(err.to_string().starts_with("Database error"));
    }
}
