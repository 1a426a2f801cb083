use thiserror::Error;

/// Errors that can occur while generating a convexity report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Source CSV file does not exist. The only recoverable error:
    /// the file is skipped and processing continues.
    #[error("File {0} not found.")]
    MissingFile(String),

    /// Column access, type or CSV parse error from Polars
    #[error("Data error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// A plot selection produced no rows, so no y-axis range exists
    #[error("No rows available for '{0}'")]
    EmptySelection(String),

    /// Plotting backend failure
    #[error("Render error: {0}")]
    Render(String),

    /// Filesystem error (directory scan, PNG write)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;
