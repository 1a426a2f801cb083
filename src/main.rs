//! Convexity Plots - Main entry point
//!
//! Reads `convexity_results_*.csv` files produced by the global
//! convexity experiment and generates six scatter plots per file,
//! comparing objective value against precomputed similarity metrics.
//!
//! Module organization:
//! - `report`: table loading, plot specs, statistics, PNG rendering
//! - `config`: report configuration with env overrides
//! - `error`: error types

pub mod config;
pub mod error;
pub mod report;

use std::path::PathBuf;

fn main() {
    println!("Convexity Plots v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().collect();
    let mut config = config::ReportConfig::from_env();
    parse_args(&args, &mut config);

    let files = match report::discover_result_files(&config.data_dir) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("✗ Failed to scan {}: {}", config.data_dir.display(), e);
            std::process::exit(1);
        }
    };

    if files.is_empty() {
        println!(
            "No convexity_results_*.csv files in {}",
            config.data_dir.display()
        );
        return;
    }
    println!("Found {} result file(s)\n", files.len());

    for path in &files {
        if let Err(e) = report::generate_report(path, &config) {
            eprintln!("✗ Failed to process {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    println!("\n✓ All reports generated");
}

/// Parse command-line arguments into the config
///
/// Only `--dir <path>` is recognized: the directory scanned for result
/// files and receiving the PNGs. Unknown arguments are ignored.
fn parse_args(args: &[String], config: &mut config::ReportConfig) {
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" if i + 1 < args.len() => {
                config.data_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            _ => i += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_dir() {
        let mut config = config::ReportConfig::default();
        let args: Vec<String> = ["convexity_plots", "--dir", "/tmp/results"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        parse_args(&args, &mut config);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/results"));
    }

    #[test]
    fn test_parse_args_ignores_unknown() {
        let mut config = config::ReportConfig::default();
        let args: Vec<String> = ["convexity_plots", "--bogus", "x"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        parse_args(&args, &mut config);
        assert_eq!(config.data_dir, PathBuf::from("."));
    }
}
