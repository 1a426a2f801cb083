//! Report generator configuration
//!
//! All settings have compile-time defaults matching the original report
//! layout (1000x600 px figures). Environment variables provide optional
//! overrides with validated parsing - invalid values warn and fall back
//! to the default rather than aborting.

use std::path::PathBuf;

/// Default figure width in pixels
const DEFAULT_PLOT_WIDTH: u32 = 1000;

/// Default figure height in pixels
const DEFAULT_PLOT_HEIGHT: u32 = 600;

/// Default scatter point radius in pixels
const DEFAULT_POINT_SIZE: i32 = 4;

/// Valid range for plot dimensions in pixels
const DIMENSION_RANGE: std::ops::RangeInclusive<u32> = 100..=10_000;

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory scanned for result CSVs; PNGs are written here too
    pub data_dir: PathBuf,

    /// Figure width in pixels
    pub plot_width: u32,

    /// Figure height in pixels
    pub plot_height: u32,

    /// Scatter point radius in pixels
    pub point_size: i32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            plot_width: DEFAULT_PLOT_WIDTH,
            plot_height: DEFAULT_PLOT_HEIGHT,
            point_size: DEFAULT_POINT_SIZE,
        }
    }
}

impl ReportConfig {
    /// Create config from environment variables, falling back to defaults
    ///
    /// Recognized variables:
    /// - `CONVEXITY_PLOT_WIDTH` - figure width in pixels [100-10000]
    /// - `CONVEXITY_PLOT_HEIGHT` - figure height in pixels [100-10000]
    /// - `CONVEXITY_POINT_SIZE` - point radius in pixels [1-50]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let plot_width = env_u32(
            "CONVEXITY_PLOT_WIDTH",
            defaults.plot_width,
            DIMENSION_RANGE,
        );
        let plot_height = env_u32(
            "CONVEXITY_PLOT_HEIGHT",
            defaults.plot_height,
            DIMENSION_RANGE,
        );
        let point_size = env_u32("CONVEXITY_POINT_SIZE", defaults.point_size as u32, 1..=50);

        Self {
            data_dir: defaults.data_dir,
            plot_width,
            plot_height,
            point_size: point_size as i32,
        }
    }
}

/// Read a u32 environment variable with range validation
///
/// Unset or empty means "use default" (no warning). A value that does not
/// parse or falls outside `range` warns and uses the default.
fn env_u32(name: &str, default: u32, range: std::ops::RangeInclusive<u32>) -> u32 {
    let raw = match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => return default,
    };

    match raw.trim().parse::<u32>() {
        Ok(v) if range.contains(&v) => v,
        Ok(v) => {
            eprintln!(
                "⚠ {} = {} out of valid range [{}-{}], using default: {}",
                name,
                v,
                range.start(),
                range.end(),
                default
            );
            default
        }
        Err(_) => {
            eprintln!(
                "⚠ Invalid value for {}: '{}', using default: {}",
                name, raw, default
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.plot_width, 1000);
        assert_eq!(config.plot_height, 600);
        assert_eq!(config.point_size, 4);
        assert_eq!(config.data_dir, PathBuf::from("."));
    }

    #[test]
    fn test_env_u32_unset_uses_default() {
        assert_eq!(env_u32("CONVEXITY_TEST_UNSET_VAR", 1000, 100..=10_000), 1000);
    }

    #[test]
    fn test_env_u32_invalid_uses_default() {
        std::env::set_var("CONVEXITY_TEST_BAD_VAR", "abc");
        assert_eq!(env_u32("CONVEXITY_TEST_BAD_VAR", 600, 100..=10_000), 600);
        std::env::remove_var("CONVEXITY_TEST_BAD_VAR");
    }

    #[test]
    fn test_env_u32_out_of_range_uses_default() {
        std::env::set_var("CONVEXITY_TEST_RANGE_VAR", "20");
        assert_eq!(env_u32("CONVEXITY_TEST_RANGE_VAR", 600, 100..=10_000), 600);
        std::env::remove_var("CONVEXITY_TEST_RANGE_VAR");
    }

    #[test]
    fn test_env_u32_valid_override() {
        std::env::set_var("CONVEXITY_TEST_OK_VAR", "1500");
        assert_eq!(env_u32("CONVEXITY_TEST_OK_VAR", 600, 100..=10_000), 1500);
        std::env::remove_var("CONVEXITY_TEST_OK_VAR");
    }
}
