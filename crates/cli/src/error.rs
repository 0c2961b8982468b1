use movie_rentals_core::error::CoreError;

/// Error returned by command handlers.
///
/// Wraps [`CoreError`] for domain errors and sqlx errors for everything the
/// store reports that has no domain meaning.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `movie_rentals_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Classify a sqlx error.
///
/// PostgreSQL unique violations (error code 23505) become
/// [`CoreError::Conflict`] naming the constraint; everything else is kept
/// as [`AppError::Database`].
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return AppError::Core(CoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                )));
            }
        }
        AppError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn non_database_errors_stay_database_errors() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_matches!(err, AppError::Database(sqlx::Error::RowNotFound));
    }

    #[test]
    fn core_errors_display_transparently() {
        let err = AppError::from(CoreError::Validation("year must be an integer".into()));
        assert_eq!(err.to_string(), "Validation failed: year must be an integer");
    }
}
