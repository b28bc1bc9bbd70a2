use diesel::r2d2::PoolError;
use thiserror::Error;

/// Errors surfaced by the warehouse repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Checking a connection out of the pool failed.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    /// The database rejected or failed a query.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
