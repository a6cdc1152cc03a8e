//! Typed classification of database failures.
//!
//! Callers need to distinguish "the row is gone" from "the statement
//! violated a constraint" from "the database is unreachable" -- the first
//! two are permanent and map to client errors, the last is transient and a
//! candidate for retry at the caller's discretion. Everything the driver
//! reports is folded into one of those buckets here, at the repository
//! boundary, instead of leaking `sqlx::Error` upward.

/// Convenience alias for repository return values.
pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The statement expected a row that does not exist.
    #[error("Row not found")]
    NotFound,

    /// A unique, foreign-key, or check constraint rejected the statement
    /// (SQLSTATE class 23). Permanent for the given input.
    #[error("Constraint violation ({constraint}): {message}")]
    Constraint { constraint: String, message: String },

    /// The database could not be reached or the pool gave up. Transient.
    #[error("Database connection failure: {0}")]
    Connection(String),

    /// Anything else the driver reported.
    #[error(transparent)]
    Other(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::PoolTimedOut => {
                DbError::Connection("connection pool timed out".to_string())
            }
            sqlx::Error::PoolClosed => DbError::Connection("connection pool closed".to_string()),
            sqlx::Error::Io(io_err) => DbError::Connection(io_err.to_string()),
            sqlx::Error::Database(db_err) => {
                // SQLSTATE class 23 covers integrity violations: 23505
                // unique, 23503 foreign key, 23514 check, 23502 not null.
                let is_integrity = db_err
                    .code()
                    .map(|c| c.starts_with("23"))
                    .unwrap_or(false);
                if is_integrity {
                    DbError::Constraint {
                        constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                        message: db_err.message().to_string(),
                    }
                } else {
                    DbError::Other(sqlx::Error::Database(db_err))
                }
            }
            other => DbError::Other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_row_not_found_classifies_as_not_found() {
        assert_matches!(DbError::from(sqlx::Error::RowNotFound), DbError::NotFound);
    }

    #[test]
    fn test_pool_failures_classify_as_connection() {
        assert_matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::Connection(_)
        );
        assert_matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::Connection(_)
        );
    }

    #[test]
    fn test_io_failure_classifies_as_connection() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert_matches!(DbError::from(sqlx::Error::Io(io)), DbError::Connection(_));
    }
}
