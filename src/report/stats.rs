//! Reference objectives and correlation statistics

use polars::prelude::*;

use crate::error::{ReportError, Result};

use super::spec::ReferenceKind;
use super::table::{ResultTable, BEST_KNOWN_OBJECTIVE, OBJECTIVE};

/// Reference scalars derived once per result table
///
/// Each scatter plot draws one vertical line at the reference objective
/// matching its `ReferenceKind`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceValues {
    /// First value of `BestKnownObjective`, absent when the column is
    /// missing (the best-known reference line is then suppressed)
    pub best_known: Option<f64>,
    /// Minimum objective over all rows
    pub best_of_1000: f64,
    /// Mean objective over all rows
    pub average: f64,
}

impl ReferenceValues {
    /// Derive the reference scalars from a loaded table
    pub fn compute(table: &ResultTable) -> Result<Self> {
        let objective = table.column_f64(OBJECTIVE)?;

        let best_of_1000 = objective
            .min()
            .ok_or_else(|| ReportError::EmptySelection(OBJECTIVE.to_string()))?;
        let average = objective
            .mean()
            .ok_or_else(|| ReportError::EmptySelection(OBJECTIVE.to_string()))?;

        let best_known = if table.has_column(BEST_KNOWN_OBJECTIVE) {
            table.first_f64(BEST_KNOWN_OBJECTIVE)
        } else {
            None
        };

        Ok(Self {
            best_known,
            best_of_1000,
            average,
        })
    }

    /// Reference line position and legend label for one plot, or None
    /// when the best-known value is unavailable
    ///
    /// Best-known and best-of-1000 objectives are integers in the result
    /// files, so their labels carry the literal value; the average gets
    /// two decimal places.
    pub fn line_for(&self, kind: ReferenceKind) -> Option<(f64, String)> {
        match kind {
            ReferenceKind::BestKnown => self
                .best_known
                .map(|v| (v, format!("Best Known ({})", v))),
            ReferenceKind::BestOf1000 => Some((
                self.best_of_1000,
                format!("Best of 1000 ({})", self.best_of_1000),
            )),
            ReferenceKind::Average => {
                Some((self.average, format!("Average Objective ({:.2})", self.average)))
            }
        }
    }
}

/// Pearson correlation coefficient over (x, y) pairs
///
/// Degenerate inputs (fewer than two points, or zero variance on either
/// axis) yield 0, matching the experiment driver's summary output.
pub fn pearson(points: &[(f64, f64)]) -> f64 {
    let n = points.len() as f64;
    if n < 2.0 {
        return 0.0;
    }

    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut num = 0.0;
    let mut den_x = 0.0;
    let mut den_y = 0.0;
    for &(x, y) in points {
        let dx = x - mean_x;
        let dy = y - mean_y;
        num += dx * dy;
        den_x += dx * dx;
        den_y += dy * dy;
    }

    if den_x == 0.0 || den_y == 0.0 {
        return 0.0;
    }

    num / (den_x * den_y).sqrt()
}
