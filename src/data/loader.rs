//! CSV Data Loader Module
//! Reads the sales dataset into a Polars DataFrame.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

/// Cell values the dataset uses for unknown years and publishers.
const MISSING_MARKERS: [&str; 5] = ["N/A", "NA", "NaN", "null", ""];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("file {} not found", .0.display())]
    NotFound(PathBuf),
    #[error("failed to load {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
}

/// Loads the sales CSV with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file, reporting why it could not be read.
    pub fn try_load(path: &Path) -> Result<DataFrame, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        let null_values = NullValues::AllColumns(
            MISSING_MARKERS.iter().map(|marker| (*marker).into()).collect(),
        );

        LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_null_values(Some(null_values))
            .with_ignore_errors(true)
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|source| LoaderError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load a CSV file; failures are logged and yield `None`.
    pub fn load(path: &Path) -> Option<DataFrame> {
        match Self::try_load(path) {
            Ok(df) => {
                info!(
                    rows = df.height(),
                    columns = df.width(),
                    "Load successful: {}",
                    path.display()
                );
                Some(df)
            }
            Err(err) => {
                error!("Error: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = DataLoader::try_load(Path::new("definitely/not/here.csv"))
            .expect_err("missing file fails");
        assert!(matches!(err, LoaderError::NotFound(_)));
        assert!(DataLoader::load(Path::new("definitely/not/here.csv")).is_none());
    }

    #[test]
    fn missing_markers_become_nulls() {
        let file = write_csv(
            "Name,Year,Publisher\n\
             Pong,N/A,Atari\n\
             Tetris,1989,N/A\n",
        );

        let df = DataLoader::try_load(file.path()).expect("csv loads");
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("Year").expect("year column").null_count(), 1);
        assert_eq!(
            df.column("Publisher").expect("publisher column").null_count(),
            1
        );
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["Name", "Year", "Publisher"]);
    }
}
