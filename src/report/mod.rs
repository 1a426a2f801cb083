//! Convexity report generation
//!
//! The report pipeline for one result file:
//! 1. Load the CSV into a `ResultTable`
//! 2. Derive the reference objectives (best known, best of 1000, average)
//! 3. For each of the six plot specs, print the objective/similarity
//!    correlation and render the scatter PNG
//!
//! Files are processed one at a time; within a file the six plots are
//! generated one at a time. A missing input file is logged and skipped,
//! every other failure propagates to the caller.

pub mod render;
pub mod spec;
pub mod stats;
pub mod table;

use std::path::{Path, PathBuf};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};

pub use spec::{sanitize_title, PlotSpec, ReferenceKind, SimilarityBasis};
pub use stats::{pearson, ReferenceValues};
pub use table::ResultTable;

/// Filename prefix of result files produced by the convexity experiment
const RESULT_FILE_PREFIX: &str = "convexity_results_";

/// Filename extension of result files
const RESULT_FILE_EXT: &str = ".csv";

/// Scan a directory for `convexity_results_*.csv` files
///
/// Order is filesystem-dependent; zero matches is not an error.
pub fn discover_result_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with(RESULT_FILE_PREFIX) && name.ends_with(RESULT_FILE_EXT) {
            files.push(entry.path());
        }
    }
    Ok(files)
}

/// Short instance identifier extracted from a result filename
///
/// Takes the substring after the last underscore, before the `.csv`
/// extension: `convexity_results_A.csv` -> `A`. Purely cosmetic, used
/// only in plot titles.
pub fn derive_instance_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(RESULT_FILE_EXT).unwrap_or(&name);
    stem.rsplit('_').next().unwrap_or(stem).to_string()
}

/// Generate the six scatter plots for one result file
///
/// Returns the paths of the PNGs written. A missing file logs
/// `File <name> not found.` and returns an empty list - the caller
/// continues with the next file.
pub fn generate_report(path: &Path, config: &ReportConfig) -> Result<Vec<PathBuf>> {
    let table = match ResultTable::load(path) {
        Ok(table) => table,
        Err(ReportError::MissingFile(name)) => {
            println!("File {} not found.", name);
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    let instance = derive_instance_name(path);
    println!(
        "Processing instance {} ({} local optima)",
        instance,
        table.height()
    );

    let refs = ReferenceValues::compute(&table)?;

    let mut saved = Vec::new();
    for spec in &PlotSpec::ALL {
        let points = table.points(spec)?;
        println!(
            "Correlation ({}): {:.4}",
            spec.correlation_name(),
            pearson(&points)
        );

        let title = spec.title(&instance);
        let safe_title = sanitize_title(&title);
        let out_path = config.data_dir.join(format!("{}.png", safe_title));

        render::render_plot(&points, &refs, spec, &title, config, &out_path)?;
        println!("Saved {}.png", safe_title);
        saved.push(out_path);
    }

    Ok(saved)
}
