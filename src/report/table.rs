//! Result table loading and column access
//!
//! Wraps a Polars DataFrame loaded from one `convexity_results_*.csv`
//! file. The table is immutable after load and discarded once its plots
//! are generated. Beyond the missing-file check there is no schema
//! validation: a missing or mistyped column surfaces as a Polars error
//! when the corresponding plot is generated.

use std::path::Path;

use polars::prelude::*;

use crate::error::{ReportError, Result};

use super::spec::PlotSpec;

/// Column flagging the minimum-objective solution of the sampled set
const IS_BEST_OF_1000: &str = "IsBestOf1000";

/// X column shared by all plots
pub const OBJECTIVE: &str = "Objective";

/// Optional column holding the externally supplied reference optimum
pub const BEST_KNOWN_OBJECTIVE: &str = "BestKnownObjective";

/// One result file's local-optima table
#[derive(Debug)]
pub struct ResultTable {
    df: DataFrame,
}

impl ResultTable {
    /// Load a result table from a CSV file
    ///
    /// A missing file returns `ReportError::MissingFile`, the one
    /// recoverable error in the pipeline.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReportError::MissingFile(path.display().to_string()));
        }

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;

        Ok(Self { df })
    }

    /// Wrap an already-built DataFrame
    pub fn new(df: DataFrame) -> Self {
        Self { df }
    }

    /// Number of solutions in the table
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Whether the table carries the given column
    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    /// A column cast to f64 (integer CSV columns are widened)
    pub fn column_f64(&self, name: &str) -> Result<Float64Chunked> {
        column_as_f64(&self.df, name)
    }

    /// First value of a column cast to f64, if the column exists and
    /// has at least one non-null row
    pub fn first_f64(&self, name: &str) -> Option<f64> {
        self.column_f64(name).ok().and_then(|ca| ca.get(0))
    }

    /// The (Objective, y-column) pairs plotted for one spec
    ///
    /// Plots referencing the best-of-1000 objective drop the flagged
    /// best row; all other plots use every row. Rows where either value
    /// is null are skipped.
    pub fn points(&self, spec: &PlotSpec) -> Result<Vec<(f64, f64)>> {
        let selected = if spec.excludes_best_of_1000() {
            self.without_best_of_1000()?
        } else {
            self.df.clone()
        };

        let xs = column_as_f64(&selected, OBJECTIVE)?;
        let ys = column_as_f64(&selected, spec.y_column)?;

        Ok(xs
            .into_iter()
            .zip(ys.into_iter())
            .filter_map(|(x, y)| Some((x?, y?)))
            .collect())
    }

    /// All rows except the one(s) flagged as best of 1000
    fn without_best_of_1000(&self) -> Result<DataFrame> {
        let mask = self
            .df
            .column(IS_BEST_OF_1000)?
            .as_materialized_series()
            .bool()?
            .clone();
        let keep = !&mask;
        Ok(self.df.filter(&keep)?)
    }
}

/// Fetch a column as Float64Chunked, casting if needed
fn column_as_f64(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.clone())
}
