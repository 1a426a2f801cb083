//! Scatter plot rendering
//!
//! Draws one PNG per plot spec: semi-transparent scatter of objective
//! value against a similarity column, a dashed vertical line at the
//! spec's reference objective, legend at the lower right, grid on. The
//! drawing backend is dropped when the function returns, so each of the
//! six figures releases its canvas before the next one is built.

use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};

use super::spec::PlotSpec;
use super::stats::ReferenceValues;

/// Extra headroom above the tallest selected point
const Y_HEADROOM: f64 = 5.0;

/// Horizontal padding on each side of the data, as a fraction of span
const X_MARGIN_FRACTION: f64 = 0.05;

/// Render one scatter plot to `out_path`
///
/// An empty selection has no valid y-axis maximum and is reported as an
/// error rather than producing a degenerate figure.
pub fn render_plot(
    points: &[(f64, f64)],
    refs: &ReferenceValues,
    spec: &PlotSpec,
    title: &str,
    config: &ReportConfig,
    out_path: &Path,
) -> Result<()> {
    if points.is_empty() {
        return Err(ReportError::EmptySelection(spec.y_column.to_string()));
    }

    draw(points, refs, spec, title, config, out_path)
        .map_err(|e| ReportError::Render(e.to_string()))
}

fn draw(
    points: &[(f64, f64)],
    refs: &ReferenceValues,
    spec: &PlotSpec,
    title: &str,
    config: &ReportConfig,
    out_path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(out_path, (config.plot_width, config.plot_height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) = padded_x_range(points);
    let y_min = spec.y_floor();
    let y_max = points
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max)
        + Y_HEADROOM;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Objective Function Value")
        .y_desc("Similarity")
        .draw()?;

    let point_style = BLUE.mix(0.5).filled();
    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), config.point_size, point_style)),
        )?
        .label("Local Optima")
        .legend(move |(x, y)| Circle::new((x + 10, y), 4, point_style));

    if let Some((x, label)) = refs.line_for(spec.reference) {
        chart
            .draw_series(DashedLineSeries::new(
                [(x, y_min), (x, y_max)],
                6,
                4,
                RED.stroke_width(2),
            ))?
            .label(label)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// X-axis range with a small margin on each side
///
/// A degenerate span (single distinct objective) still needs a non-empty
/// range for the axis to build.
fn padded_x_range(points: &[(f64, f64)]) -> (f64, f64) {
    let min = points.iter().map(|&(x, _)| x).fold(f64::INFINITY, f64::min);
    let max = points
        .iter()
        .map(|&(x, _)| x)
        .fold(f64::NEG_INFINITY, f64::max);

    let span = max - min;
    let pad = if span > 0.0 {
        span * X_MARGIN_FRACTION
    } else {
        1.0
    };
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::spec::PlotSpec;

    fn spec_for(column: &str) -> &'static PlotSpec {
        PlotSpec::ALL
            .iter()
            .find(|s| s.y_column == column)
            .unwrap()
    }

    fn sample_refs() -> ReferenceValues {
        ReferenceValues {
            best_known: Some(15.0),
            best_of_1000: 10.0,
            average: 20.0,
        }
    }

    #[test]
    fn test_padded_x_range() {
        let (lo, hi) = padded_x_range(&[(10.0, 0.0), (30.0, 0.0)]);
        assert_eq!(lo, 9.0);
        assert_eq!(hi, 31.0);
    }

    #[test]
    fn test_padded_x_range_degenerate() {
        let (lo, hi) = padded_x_range(&[(10.0, 0.0), (10.0, 1.0)]);
        assert!(lo < 10.0 && hi > 10.0);
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plot.png");
        let points = vec![(10.0, 80.0), (20.0, 85.0), (30.0, 90.0)];

        render_plot(
            &points,
            &sample_refs(),
            spec_for("SimAvgEdges"),
            "Instance A: Objective vs Avg Similarity (Edges)",
            &ReportConfig::default(),
            &out,
        )
        .unwrap();

        let meta = std::fs::metadata(&out).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn test_render_empty_selection_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("plot.png");

        let err = render_plot(
            &[],
            &sample_refs(),
            spec_for("SimBest1000Edges"),
            "Instance A: Objective vs Similarity to Best of 1000 (Edges)",
            &ReportConfig::default(),
            &out,
        )
        .unwrap_err();

        assert!(matches!(err, ReportError::EmptySelection(_)));
        assert!(!out.exists());
    }
}
