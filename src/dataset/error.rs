//! Dataset error types
//!
//! Any of these at startup means the dashboard cannot be served.

use thiserror::Error;

/// Errors that can occur while loading the launch dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// File could not be opened or read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Row could not be parsed as CSV or into the expected column types
    #[error("CSV error on line {line}: {message}")]
    Csv { line: u64, message: String },

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Payload mass is negative or not finite
    #[error("Invalid payload mass on line {line}: {value}")]
    InvalidPayload { line: u64, value: f64 },

    /// Outcome class is neither 0 nor 1
    #[error("Invalid outcome class on line {line}: {value}")]
    InvalidOutcome { line: u64, value: i64 },
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => DatasetError::Io(e),
            _ => DatasetError::Csv { line, message },
        }
    }
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
