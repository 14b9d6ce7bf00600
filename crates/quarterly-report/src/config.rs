//! Configuration for the quarterly income report

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::constants;
use crate::render::ReportStyle;

// =============================================================================
// File-based Configuration (config.toml)
// =============================================================================

/// Configuration loaded from a TOML file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub generator: GeneratorSection,
    #[serde(default)]
    pub report: ReportSection,
}

/// `[generator]` section
#[derive(Debug, Default, Deserialize)]
pub struct GeneratorSection {
    /// Number of sales records to synthesize
    pub count: Option<usize>,
    /// Calendar year of the generated sales
    pub year: Option<i32>,
    /// Fixed random seed for a reproducible data set
    pub seed: Option<u64>,
}

/// `[report]` section
#[derive(Debug, Default, Deserialize)]
pub struct ReportSection {
    /// Highest-profit orders listed per quarter
    pub top_orders: Option<usize>,
    pub style: Option<ReportStyle>,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

// =============================================================================
// Runtime Configuration
// =============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("record count must be at least 1")]
    ZeroRecordCount,
    #[error("top orders must be at least 1")]
    ZeroTopOrders,
    #[error("sales year {0} is outside 1..=9999")]
    YearOutOfRange(i32),
}

/// Values given on the command line; these win over config.toml
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub count: Option<usize>,
    pub year: Option<i32>,
    pub seed: Option<u64>,
    pub top_orders: Option<usize>,
    pub style: Option<ReportStyle>,
}

/// Resolved settings for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub record_count: usize,
    pub sales_year: i32,
    /// None means draw a fresh seed for this run
    pub seed: Option<u64>,
    pub top_orders: usize,
    pub style: ReportStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            record_count: constants::DEFAULT_RECORD_COUNT,
            sales_year: constants::DEFAULT_SALES_YEAR,
            seed: None,
            top_orders: constants::DEFAULT_TOP_ORDERS,
            style: ReportStyle::default(),
        }
    }
}

impl Config {
    /// Merge file config and command-line overrides over the defaults
    pub fn resolve(file: &FileConfig, overrides: Overrides) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            record_count: overrides
                .count
                .or(file.generator.count)
                .unwrap_or(defaults.record_count),
            sales_year: overrides
                .year
                .or(file.generator.year)
                .unwrap_or(defaults.sales_year),
            seed: overrides.seed.or(file.generator.seed),
            top_orders: overrides
                .top_orders
                .or(file.report.top_orders)
                .unwrap_or(defaults.top_orders),
            style: overrides
                .style
                .or(file.report.style)
                .unwrap_or(defaults.style),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.record_count == 0 {
            return Err(ConfigError::ZeroRecordCount);
        }
        if self.top_orders == 0 {
            return Err(ConfigError::ZeroTopOrders);
        }
        if !(1..=9999).contains(&self.sales_year) {
            return Err(ConfigError::YearOutOfRange(self.sales_year));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let config = Config::resolve(&FileConfig::default(), Overrides::default()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.record_count, 1000);
        assert_eq!(config.sales_year, 2023);
        assert_eq!(config.top_orders, 3);
        assert_eq!(config.seed, None);
        assert_eq!(config.style, ReportStyle::Box);
    }

    #[test]
    fn test_parse_full_file() {
        let file = FileConfig::parse(
            r#"
            [generator]
            count = 250
            year = 2024
            seed = 99

            [report]
            top_orders = 5
            style = "plain"
            "#,
        )
        .unwrap();
        let config = Config::resolve(&file, Overrides::default()).unwrap();
        assert_eq!(config.record_count, 250);
        assert_eq!(config.sales_year, 2024);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.top_orders, 5);
        assert_eq!(config.style, ReportStyle::Plain);
    }

    #[test]
    fn test_parse_partial_file() {
        let file = FileConfig::parse("[report]\ntop_orders = 1\n").unwrap();
        let config = Config::resolve(&file, Overrides::default()).unwrap();
        assert_eq!(config.top_orders, 1);
        assert_eq!(config.record_count, constants::DEFAULT_RECORD_COUNT);
    }

    #[test]
    fn test_parse_rejects_bad_types() {
        assert!(FileConfig::parse("[generator]\ncount = \"many\"\n").is_err());
        assert!(FileConfig::parse("[report]\nstyle = \"fancy\"\n").is_err());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = FileConfig::parse("[generator]\ncount = 10\nseed = 1\n").unwrap();
        let overrides = Overrides {
            count: Some(20),
            seed: Some(2),
            ..Default::default()
        };
        let config = Config::resolve(&file, overrides).unwrap();
        assert_eq!(config.record_count, 20);
        assert_eq!(config.seed, Some(2));
    }

    #[test]
    fn test_validation_errors() {
        let file = FileConfig::default();
        let resolve = |overrides| Config::resolve(&file, overrides).unwrap_err();

        assert_eq!(
            resolve(Overrides { count: Some(0), ..Default::default() }),
            ConfigError::ZeroRecordCount
        );
        assert_eq!(
            resolve(Overrides { top_orders: Some(0), ..Default::default() }),
            ConfigError::ZeroTopOrders
        );
        assert_eq!(
            resolve(Overrides { year: Some(10_000), ..Default::default() }),
            ConfigError::YearOutOfRange(10_000)
        );
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = FileConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
