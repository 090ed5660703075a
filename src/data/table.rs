//! Cleaned sales table.

use super::columns;
use polars::prelude::*;

/// One game's release on one platform with its sales figures (millions).
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub name: String,
    pub platform: String,
    pub year: i32,
    pub genre: String,
    pub publisher: String,
    pub na_sales: f64,
    pub global_sales: f64,
}

/// Read-only sales table produced by [`DataCleaner`](super::DataCleaner).
///
/// Holds no missing values and no duplicate rows; `Year` is `Int32` and every
/// sales column is `Float64`.
#[derive(Debug, Clone)]
pub struct SalesTable {
    df: DataFrame,
}

impl SalesTable {
    pub(super) fn new(df: DataFrame) -> Self {
        Self { df }
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Same schema and same values, nulls compared equal.
    pub fn equals(&self, other: &SalesTable) -> bool {
        self.df.equals_missing(&other.df)
    }

    /// Materialize every row as a [`SalesRecord`].
    pub fn records(&self) -> PolarsResult<Vec<SalesRecord>> {
        Self::records_of(&self.df)
    }

    /// Materialize rows of a frame that carries the cleaned schema.
    pub(crate) fn records_of(df: &DataFrame) -> PolarsResult<Vec<SalesRecord>> {
        let names = df.column(columns::NAME)?.str()?;
        let platforms = df.column(columns::PLATFORM)?.str()?;
        let years = df.column(columns::YEAR)?.i32()?;
        let genres = df.column(columns::GENRE)?.str()?;
        let publishers = df.column(columns::PUBLISHER)?.str()?;
        let na_sales = df.column(columns::NA_SALES)?.f64()?;
        let global_sales = df.column(columns::GLOBAL_SALES)?.f64()?;

        let records = (0..df.height())
            .filter_map(|i| {
                Some(SalesRecord {
                    name: names.get(i)?.to_string(),
                    platform: platforms.get(i)?.to_string(),
                    year: years.get(i)?,
                    genre: genres.get(i)?.to_string(),
                    publisher: publishers.get(i)?.to_string(),
                    na_sales: na_sales.get(i)?,
                    global_sales: global_sales.get(i)?,
                })
            })
            .collect();

        Ok(records)
    }
}
