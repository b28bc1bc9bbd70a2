use diesel::prelude::*;

use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, YearReader};

impl YearReader for DieselRepository {
    fn list_years(&self) -> RepositoryResult<Vec<i32>> {
        use crate::schema::dim_date;

        let mut conn = self.conn()?;

        let years = dim_date::table
            .select(dim_date::calendar_year)
            .distinct()
            .order(dim_date::calendar_year.asc())
            .load::<i32>(&mut conn)?;

        Ok(years)
    }
}
