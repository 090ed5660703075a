//! Data Cleaner Module
//! Drops incomplete and duplicate rows and normalizes column types.

use super::columns;
use super::table::SalesTable;
use polars::prelude::*;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("required column '{0}' is missing from the dataset")]
    MissingColumn(String),
}

/// Turns a freshly loaded DataFrame into a [`SalesTable`].
pub struct DataCleaner;

impl DataCleaner {
    /// Drop rows with any missing field, drop exact duplicates (first one wins,
    /// order preserved), cast text columns to `String`, `Year` to `Int32` and
    /// sales columns to `Float64`. A value that cannot be converted fails the
    /// clean.
    pub fn clean(df: &DataFrame) -> Result<SalesTable, CleanError> {
        Self::check_required_columns(df)?;

        let input_rows = df.height();
        let complete = df.clone().lazy().drop_nulls(None).collect()?;
        let complete_rows = complete.height();

        let unique = complete
            .lazy()
            .unique_stable(None, UniqueKeepStrategy::First)
            .collect()?;

        debug!(
            input_rows,
            dropped_incomplete = input_rows - complete_rows,
            dropped_duplicates = complete_rows - unique.height(),
            "cleaned sales rows"
        );

        // Strict casts: a value that does not convert is an error, never a null.
        let present = Self::column_names(&unique);
        let mut casts: Vec<Expr> = columns::TEXT
            .iter()
            .map(|name| col(*name).cast(DataType::String))
            .collect();
        casts.push(col(columns::YEAR).strict_cast(DataType::Int32));
        casts.extend(
            columns::SALES
                .iter()
                .filter(|name| present.iter().any(|p| p == *name))
                .map(|name| col(*name).strict_cast(DataType::Float64)),
        );

        let typed = unique.lazy().with_columns(casts).collect()?;
        Ok(SalesTable::new(typed))
    }

    fn check_required_columns(df: &DataFrame) -> Result<(), CleanError> {
        let present = Self::column_names(df);
        match columns::REQUIRED
            .iter()
            .find(|required| !present.iter().any(|p| p == *required))
        {
            Some(missing) => Err(CleanError::MissingColumn(missing.to_string())),
            None => Ok(()),
        }
    }

    fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_sales() -> DataFrame {
        df!(
            "Name" => ["Halo", "Halo", "FIFA", "Mystery"],
            "Platform" => ["X360", "X360", "PS2", "PC"],
            "Year" => [Some(2001i64), Some(2001), Some(2005), None],
            "Genre" => ["Action", "Action", "Sports", "Puzzle"],
            "Publisher" => ["Microsoft", "Microsoft", "EA", "Unknown"],
            "NA_Sales" => [1.0, 1.0, 1.2, 0.1],
            "Global_Sales" => [1.5, 1.5, 2.0, 0.3]
        )
        .expect("valid frame")
    }

    #[test]
    fn drops_incomplete_and_duplicate_rows() {
        let table = DataCleaner::clean(&raw_sales()).expect("cleans");
        assert_eq!(table.height(), 2);

        let genres: Vec<String> = table
            .records()
            .expect("records")
            .into_iter()
            .map(|r| r.genre)
            .collect();
        assert_eq!(genres, vec!["Action".to_string(), "Sports".to_string()]);
    }

    #[test]
    fn normalizes_year_and_sales_types() {
        let raw = df!(
            "Name" => ["Pong"],
            "Platform" => ["2600"],
            "Year" => [1972.0],
            "Genre" => ["Sports"],
            "Publisher" => ["Atari"],
            "NA_Sales" => [1i64],
            "Global_Sales" => [2i64]
        )
        .expect("valid frame");

        let table = DataCleaner::clean(&raw).expect("cleans");
        let df = table.dataframe();
        assert_eq!(df.column("Year").expect("year").dtype(), &DataType::Int32);
        assert_eq!(
            df.column("Global_Sales").expect("global").dtype(),
            &DataType::Float64
        );
        assert_eq!(table.records().expect("records")[0].year, 1972);
    }

    #[test]
    fn numeric_text_columns_become_strings() {
        let raw = df!(
            "Name" => ["Pitfall!", "Pac-Man"],
            "Platform" => [2600i64, 2600],
            "Year" => [1982i64, 1982],
            "Genre" => ["Platform", "Puzzle"],
            "Publisher" => [1i64, 1],
            "NA_Sales" => [4.21, 7.28],
            "Global_Sales" => [4.5, 7.81]
        )
        .expect("valid frame");

        let table = DataCleaner::clean(&raw).expect("cleans");
        assert_eq!(
            table.dataframe().column("Platform").expect("platform").dtype(),
            &DataType::String
        );
        let records = table.records().expect("records");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].platform, "2600");
        assert_eq!(records[1].publisher, "1");
    }

    #[test]
    fn unconvertible_year_fails_instead_of_becoming_null() {
        let raw = df!(
            "Name" => ["Halo", "Pong"],
            "Platform" => ["X360", "2600"],
            "Year" => ["2006", "19xx"],
            "Genre" => ["Shooter", "Sports"],
            "Publisher" => ["Microsoft", "Atari"],
            "NA_Sales" => [1.0, 0.5],
            "Global_Sales" => [2.0, 1.0]
        )
        .expect("valid frame");

        let err = DataCleaner::clean(&raw).expect_err("19xx is not a year");
        assert!(matches!(err, CleanError::PolarsError(_)));
    }

    #[test]
    fn cleaning_is_idempotent() {
        let once = DataCleaner::clean(&raw_sales()).expect("first pass");
        let twice = DataCleaner::clean(once.dataframe()).expect("second pass");
        assert!(once.equals(&twice));
    }

    #[test]
    fn cleaned_rows_have_no_missing_fields() {
        let table = DataCleaner::clean(&raw_sales()).expect("cleans");
        for column in table.dataframe().get_columns() {
            assert_eq!(column.null_count(), 0, "column {}", column.name());
        }
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let raw = raw_sales().drop("Publisher").expect("drop column");
        let err = DataCleaner::clean(&raw).expect_err("publisher is required");
        assert!(matches!(err, CleanError::MissingColumn(ref c) if c == "Publisher"));
    }
}
