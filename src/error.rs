//! Error types for Marquee
//!
//! This module provides structured error handling using thiserror,
//! replacing ad-hoc String-based errors with proper typed errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Marquee operations
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Unsupported catalog file format
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Column not found in the catalog
    #[error("Column '{column}' not found in catalog")]
    ColumnNotFound { column: String },

    /// Catalog loaded but contains no rows
    #[error("Catalog is empty or has no rows")]
    EmptyCatalog,

    /// Selected movie has no catalog row
    #[error("Movie '{title}' not found in catalog")]
    MovieNotFound { title: String },

    /// No comment file exists for the selected movie
    #[error("No comment file for '{title}' (expected {path})")]
    CorpusNotFound { title: String, path: PathBuf },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Marquee operations
pub type Result<T> = std::result::Result<T, AppError>;

/// UI-friendly error message formatting
impl AppError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            AppError::FileIo(e) => format!("File error: {}", e),
            AppError::Polars(e) => format!("Data error: {}", e),
            AppError::UnsupportedFormat { extension } => {
                format!("Unsupported file format: '.{}'", extension)
            }
            AppError::ColumnNotFound { column } => {
                format!("Column '{}' not found", column)
            }
            AppError::EmptyCatalog => "Catalog is empty".to_string(),
            AppError::MovieNotFound { title } => {
                format!("'{}' has no catalog row", title)
            }
            AppError::CorpusNotFound { title, path } => {
                format!("No comments for '{}' (looked for {})", title, path.display())
            }
            AppError::Json(e) => format!("JSON error: {}", e),
        }
    }

    /// Get a short title for the error (for the status bar)
    pub fn title(&self) -> &'static str {
        match self {
            AppError::FileIo(_) => "File Error",
            AppError::Polars(_) => "Data Error",
            AppError::UnsupportedFormat { .. } => "Unsupported Format",
            AppError::ColumnNotFound { .. } => "Column Not Found",
            AppError::EmptyCatalog => "Empty Catalog",
            AppError::MovieNotFound { .. } => "Movie Not Found",
            AppError::CorpusNotFound { .. } => "Comments Missing",
            AppError::Json(_) => "JSON Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::ColumnNotFound {
            column: "movie title".to_string(),
        };
        assert_eq!(err.user_message(), "Column 'movie title' not found");
        assert_eq!(err.title(), "Column Not Found");

        let err = AppError::CorpusNotFound {
            title: "Inception".to_string(),
            path: PathBuf::from("comments/Inception.csv"),
        };
        assert!(err.user_message().contains("Inception"));
        assert!(err.user_message().contains("comments/Inception.csv"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::FileIo(_)));
    }
}
