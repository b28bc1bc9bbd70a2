use serde::Deserialize;
use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod customers;
pub mod sales;
pub mod years;

/// Errors surfaced by the dashboard services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The warehouse query failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Query parameters accepted by both dashboard pages.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct DashboardQuery {
    /// Calendar year selected in the sidebar; defaults to the latest
    /// year present in the warehouse.
    pub year: Option<i32>,
}
