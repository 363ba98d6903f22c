//! Movie catalog access
//!
//! The catalog is a Polars DataFrame loaded once at boot and read-only for
//! the process lifetime. It supplies the dropdown's distinct title list and
//! per-column value counts for the overview chart.

use polars::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use crate::constants::catalog::TITLE_COLUMN;
use crate::error::{AppError, Result};

/// Catalog wraps a Polars DataFrame with both lazy and materialized views
pub struct Catalog {
    /// Lazy frame kept for derived queries
    df: LazyFrame,
    /// Materialized DataFrame for immediate access
    materialized: DataFrame,
    /// Original file path
    file_path: Option<PathBuf>,
}

#[allow(dead_code)]
impl Catalog {
    /// Load the catalog from a CSV file. Fails fast: any I/O or parse
    /// problem aborts the load, and a zero-row catalog is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| AppError::UnsupportedFormat {
                extension: "No file extension".to_string(),
            })?;

        let df = match extension.to_lowercase().as_str() {
            "csv" => LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()?,
            ext => {
                return Err(AppError::UnsupportedFormat {
                    extension: ext.to_string(),
                })
            }
        };

        let materialized = df.clone().collect()?;
        if materialized.height() == 0 {
            return Err(AppError::EmptyCatalog);
        }

        Ok(Self {
            df,
            materialized,
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Get a reference to the materialized DataFrame
    pub fn dataframe(&self) -> &DataFrame {
        &self.materialized
    }

    /// Get all column names
    pub fn column_names(&self) -> Vec<String> {
        self.materialized
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Get the number of rows
    pub fn height(&self) -> usize {
        self.materialized.height()
    }

    /// Get the number of columns
    pub fn width(&self) -> usize {
        self.materialized.width()
    }

    /// Get the file path
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Get a column's values as a Series
    fn column_values(&self, col: &str) -> Result<Series> {
        self.materialized
            .column(col)
            .map(|c| c.as_materialized_series().clone())
            .map_err(|_| AppError::ColumnNotFound {
                column: col.to_string(),
            })
    }

    /// Get a column's values as strings. Nulls become empty strings;
    /// non-string columns are cast through Polars string conversion.
    pub fn string_column(&self, col: &str) -> Result<Vec<String>> {
        let series = self.column_values(col)?;

        if let Ok(str_series) = series.str() {
            return Ok(str_series
                .into_iter()
                .map(|opt| opt.unwrap_or("").to_string())
                .collect());
        }

        let casted = series.cast(&DataType::String)?;
        let ca = casted.str()?;
        Ok(ca
            .into_iter()
            .map(|opt| opt.unwrap_or("").to_string())
            .collect())
    }

    /// Sorted distinct values of the title column: the dropdown contents.
    pub fn titles(&self) -> Result<Vec<String>> {
        self.distinct_values(TITLE_COLUMN)
    }

    /// Sorted distinct non-empty values of a column.
    pub fn distinct_values(&self, col: &str) -> Result<Vec<String>> {
        let values = self.string_column(col)?;
        let set: BTreeSet<String> = values.into_iter().filter(|v| !v.is_empty()).collect();
        Ok(set.into_iter().collect())
    }

    /// (value, count) pairs for a column, descending by count with
    /// alphabetical tie-break. Nulls and empty values are skipped.
    pub fn value_counts(&self, col: &str) -> Result<Vec<(String, u32)>> {
        let values = self.string_column(col)?;

        let mut counts: HashMap<String, u32> = HashMap::new();
        for v in values {
            if !v.is_empty() {
                *counts.entry(v).or_insert(0) += 1;
            }
        }

        let mut pairs: Vec<(String, u32)> = counts.into_iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(pairs)
    }

    /// Whether a title has a catalog row
    pub fn contains_title(&self, title: &str) -> bool {
        self.string_column(TITLE_COLUMN)
            .map(|col| col.iter().any(|t| t == title))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn sample_catalog() -> Catalog {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "movie title,genre,year").unwrap();
        writeln!(file, "Inception,Sci-Fi,2010").unwrap();
        writeln!(file, "Arrival,Sci-Fi,2016").unwrap();
        writeln!(file, "Heat,Crime,1995").unwrap();
        writeln!(file, "Inception,Sci-Fi,2010").unwrap();
        file.flush().unwrap();
        Catalog::load(file.path()).unwrap()
    }

    #[test]
    fn test_catalog_loading() {
        let catalog = sample_catalog();
        assert_eq!(catalog.height(), 4);
        assert_eq!(catalog.width(), 3);
        assert_eq!(catalog.column_names(), vec!["movie title", "genre", "year"]);
    }

    #[test]
    fn test_titles_are_sorted_and_distinct() {
        let catalog = sample_catalog();
        let titles = catalog.titles().unwrap();
        assert_eq!(titles, vec!["Arrival", "Heat", "Inception"]);
    }

    #[test]
    fn test_value_counts_descending_with_tie_break() {
        let catalog = sample_catalog();
        let counts = catalog.value_counts("genre").unwrap();
        assert_eq!(
            counts,
            vec![("Sci-Fi".to_string(), 3), ("Crime".to_string(), 1)]
        );
    }

    #[test]
    fn test_missing_column_is_typed_error() {
        let catalog = sample_catalog();
        let err = catalog.distinct_values("director").unwrap_err();
        assert!(matches!(err, AppError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "movie title,genre").unwrap();
        file.flush().unwrap();

        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, AppError::EmptyCatalog));
    }

    #[test]
    fn test_unsupported_extension() {
        let mut file = Builder::new().suffix(".parquet").tempfile().unwrap();
        writeln!(file, "not a parquet file").unwrap();
        file.flush().unwrap();

        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_contains_title() {
        let catalog = sample_catalog();
        assert!(catalog.contains_title("Heat"));
        assert!(!catalog.contains_title("Tenet"));
    }

    #[test]
    fn test_numeric_column_as_string() {
        let catalog = sample_catalog();
        let years = catalog.string_column("year").unwrap();
        assert_eq!(years, vec!["2010", "2016", "1995", "2010"]);
    }
}
