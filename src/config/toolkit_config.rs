//! Toolkit Configuration - analysis and report tuning as TOML values
//!
//! Each struct implements `Default` with values matching the constants in
//! `config::defaults`, so behavior is unchanged when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults::{
    DEFAULT_ANOMALY_THRESHOLD, DEFAULT_MAX_ERROR_LINE_CHARS, DEFAULT_MAX_LISTED_ERRORS,
    DEFAULT_MOVING_AVERAGE_WINDOW, DEFAULT_PRODUCTION_UNITS, DEFAULT_TOP_N,
    DEFAULT_TREND_THRESHOLD_PERCENT,
};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ENERGY_TOOLKIT_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "toolkit_config.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for an analysis run.
///
/// Load with `ToolkitConfig::load()` which searches:
/// 1. `$ENERGY_TOOLKIT_CONFIG` env var
/// 2. `./toolkit_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolkitConfig {
    /// Aggregation and time-series parameters
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Report layout
    #[serde(default)]
    pub report: ReportConfig,
}

impl ToolkitConfig {
    /// Load configuration using the standard search order.
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded toolkit config from {}", CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(
                            path = %p.display(),
                            error = %e,
                            "Failed to load config from {}, falling back",
                            CONFIG_ENV_VAR
                        );
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        // 2. Check ./toolkit_config.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded toolkit config from ./{}", LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", LOCAL_CONFIG_FILE);
                }
            }
        }

        // 3. Defaults
        info!("No {} found, using built-in defaults", LOCAL_CONFIG_FILE);
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, err) => ConfigError::Parse(path.to_path_buf(), err),
            other => other,
        })
    }

    /// Parse and validate TOML text. Unknown keys only warn.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        // Two-pass: check for unknown keys first (warnings only)
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate all parameters, collecting every problem before failing.
    ///
    /// Rules:
    /// - Counts and windows must be > 0
    /// - Thresholds must be finite and non-negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let a = &self.analysis;
        let r = &self.report;
        let mut errors: Vec<String> = Vec::new();

        if a.top_n == 0 {
            errors.push("analysis.top_n must be > 0".to_string());
        }
        if a.moving_average_window == 0 {
            errors.push("analysis.moving_average_window must be > 0".to_string());
        }
        Self::check_threshold(a.anomaly_threshold, "analysis.anomaly_threshold", &mut errors);
        Self::check_threshold(
            a.trend_threshold_percent,
            "analysis.trend_threshold_percent",
            &mut errors,
        );

        if r.max_listed_errors == 0 {
            errors.push("report.max_listed_errors must be > 0".to_string());
        }
        if r.max_error_line_chars == 0 {
            errors.push("report.max_error_line_chars must be > 0".to_string());
        }

        let (range_errors, range_warnings) = super::validation::validate_value_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn check_threshold(value: f64, name: &str, errors: &mut Vec<String>) {
        // NaN comparisons silently pass, catch them explicitly
        if !value.is_finite() {
            errors.push(format!("{name} must be finite (got {value})"));
        } else if value < 0.0 {
            errors.push(format!("{name} = {value:.3} cannot be negative"));
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Serialize(e) => write!(f, "Config serialization error: {}", e),
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Analysis
// ============================================================================

/// Aggregation and time-series parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Days listed in the top-production ranking
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Moving-average window (samples)
    #[serde(default = "default_moving_average_window")]
    pub moving_average_window: usize,

    /// Z-score above which a point is anomalous
    #[serde(default = "default_anomaly_threshold")]
    pub anomaly_threshold: f64,

    /// Half-over-half change (%) needed to call Increasing/Decreasing
    #[serde(default = "default_trend_threshold_percent")]
    pub trend_threshold_percent: f64,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}
fn default_moving_average_window() -> usize {
    DEFAULT_MOVING_AVERAGE_WINDOW
}
fn default_anomaly_threshold() -> f64 {
    DEFAULT_ANOMALY_THRESHOLD
}
fn default_trend_threshold_percent() -> f64 {
    DEFAULT_TREND_THRESHOLD_PERCENT
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            moving_average_window: default_moving_average_window(),
            anomaly_threshold: default_anomaly_threshold(),
            trend_threshold_percent: default_trend_threshold_percent(),
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// Report layout parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Validation errors (production) or error lines (logs) listed
    #[serde(default = "default_max_listed_errors")]
    pub max_listed_errors: usize,

    /// Characters of each error line shown in the log report
    #[serde(default = "default_max_error_line_chars")]
    pub max_error_line_chars: usize,

    /// Volume unit label
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_max_listed_errors() -> usize {
    DEFAULT_MAX_LISTED_ERRORS
}
fn default_max_error_line_chars() -> usize {
    DEFAULT_MAX_ERROR_LINE_CHARS
}
fn default_units() -> String {
    DEFAULT_PRODUCTION_UNITS.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_listed_errors: default_max_listed_errors(),
            max_error_line_chars: default_max_error_line_chars(),
            units: default_units(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(ToolkitConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = ToolkitConfig::from_toml_str(
            r#"
[analysis]
moving_average_window = 3
"#,
        )
        .unwrap();
        assert_eq!(config.analysis.moving_average_window, 3);
        assert_eq!(config.analysis.top_n, DEFAULT_TOP_N);
        assert_eq!(config.report.units, "barrels");
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut config = ToolkitConfig::default();
        config.analysis.top_n = 0;
        config.analysis.moving_average_window = 0;
        config.analysis.anomaly_threshold = f64::NAN;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 3, "got: {:?}", errors);
                assert!(errors.iter().any(|e| e.contains("top_n")));
                assert!(errors.iter().any(|e| e.contains("moving_average_window")));
                assert!(errors.iter().any(|e| e.contains("anomaly_threshold")));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let mut config = ToolkitConfig::default();
        config.analysis.trend_threshold_percent = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip_preserves_values() {
        let mut config = ToolkitConfig::default();
        config.analysis.anomaly_threshold = 2.5;
        config.report.units = "bbl".to_string();

        let text = config.to_toml().unwrap();
        let parsed = ToolkitConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let err = ToolkitConfig::load_from_file(Path::new("/nonexistent/toolkit.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }
}
