use std::sync::{PoisonError, RwLock};

use chrono::{Datelike, Local};

use crate::repository::YearReader;
use crate::services::ServiceResult;

/// Process-wide memo of the calendar years present in the warehouse.
///
/// The year list only changes when the warehouse is reloaded, so it is
/// queried at most once per process and shared across requests.
#[derive(Default)]
pub struct YearCache {
    inner: RwLock<Option<Vec<i32>>>,
}

impl YearCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached year list, loading it through `repo` on first use.
    pub fn get_or_load<R>(&self, repo: &R) -> ServiceResult<Vec<i32>>
    where
        R: YearReader + ?Sized,
    {
        {
            let guard = self
                .inner
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(years) = guard.as_ref() {
                return Ok(years.clone());
            }
        }

        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another request may have filled the cache in the meantime.
        if let Some(cached) = guard.as_ref() {
            return Ok(cached.clone());
        }

        // Querying under the write lock keeps concurrent first loads
        // from hitting the warehouse more than once.
        let years = repo.list_years()?;
        *guard = Some(years.clone());

        Ok(years)
    }

    /// Drop the memoized list so the next lookup reloads it.
    pub fn invalidate(&self) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }
}

/// Resolve the year a dashboard page should show.
///
/// An explicit selection wins; otherwise the latest available year is
/// used, falling back to the current calendar year for an empty
/// warehouse.
pub fn resolve_year(requested: Option<i32>, available: &[i32]) -> i32 {
    requested
        .or_else(|| available.last().copied())
        .unwrap_or_else(|| Local::now().year())
}
