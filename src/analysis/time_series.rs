//! Time-Series Analyzer
//!
//! Trend and anomaly signals over an ordered numeric series (index =
//! implicit time step):
//! - Simple moving average over a sliding window
//! - Z-score anomaly detection against whole-series mean and sample stdev
//! - Trend direction from the mean of the second half vs the first half
//!
//! The analyzer owns its series and never mutates it, so repeated calls
//! always return identical results.

use statrs::statistics::Statistics;

use crate::config::defaults::DEFAULT_TREND_THRESHOLD_PERCENT;
use crate::types::{SeriesSummary, Trend};

use super::AnalysisError;

/// Analyzer over an immutable numeric series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesAnalyzer {
    values: Vec<f64>,
}

impl TimeSeriesAnalyzer {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Simple (unweighted) moving average.
    ///
    /// Produces `len - window + 1` values, one per window position. A series
    /// shorter than `window` is returned unchanged.
    ///
    /// # Errors
    /// `InvalidArgument` if `window` is 0.
    pub fn moving_average(&self, window: usize) -> Result<Vec<f64>, AnalysisError> {
        if window == 0 {
            return Err(AnalysisError::InvalidArgument(
                "moving average window must be > 0".to_string(),
            ));
        }
        if self.values.len() < window {
            return Ok(self.values.clone());
        }

        let divisor = window as f64;
        Ok(self
            .values
            .windows(window)
            .map(|w| w.iter().sum::<f64>() / divisor)
            .collect())
    }

    /// Indices whose z-score exceeds `threshold`, ascending.
    ///
    /// z = |value - mean| / stdev using the sample (n-1) standard deviation.
    /// A constant series has stdev 0 and therefore no anomalies. Fewer than
    /// two points yields no anomalies.
    pub fn detect_anomalies(&self, threshold: f64) -> Vec<usize> {
        if self.values.len() < 2 {
            return Vec::new();
        }

        let mean = self.values.iter().mean();
        let std_dev = self.values.iter().std_dev();

        let anomalies: Vec<usize> = self
            .values
            .iter()
            .enumerate()
            .filter(|(_, value)| {
                let z = if std_dev > 0.0 {
                    (*value - mean).abs() / std_dev
                } else {
                    0.0
                };
                z > threshold
            })
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(
            points = self.values.len(),
            mean,
            std_dev,
            threshold,
            anomalies = anomalies.len(),
            "Anomaly scan complete"
        );
        anomalies
    }

    /// Percent change from the first-half mean to the second-half mean.
    ///
    /// The split is at `len / 2`, so for odd lengths the second half holds
    /// one extra point. When the first-half mean is zero or negative the
    /// change is reported as 0. `None` with fewer than two points.
    pub fn half_change_percent(&self) -> Option<f64> {
        if self.values.len() < 2 {
            return None;
        }

        let (first, second) = self.values.split_at(self.values.len() / 2);
        let first_mean = first.iter().mean();
        let second_mean = second.iter().mean();

        if first_mean > 0.0 {
            Some((second_mean - first_mean) / first_mean * 100.0)
        } else {
            Some(0.0)
        }
    }

    /// Trend with the default 5% band.
    pub fn classify_trend(&self) -> Trend {
        self.classify_trend_with(DEFAULT_TREND_THRESHOLD_PERCENT)
    }

    /// Trend with a caller-supplied band: change above `+threshold_percent`
    /// is Increasing, below `-threshold_percent` is Decreasing.
    pub fn classify_trend_with(&self, threshold_percent: f64) -> Trend {
        match self.half_change_percent() {
            None => Trend::InsufficientData,
            Some(change) if change > threshold_percent => Trend::Increasing,
            Some(change) if change < -threshold_percent => Trend::Decreasing,
            Some(_) => Trend::Stable,
        }
    }

    /// Count, mean, sample stdev and range. `None` for an empty series.
    pub fn summary(&self) -> Option<SeriesSummary> {
        if self.values.is_empty() {
            return None;
        }

        let std_dev = if self.values.len() < 2 {
            0.0
        } else {
            self.values.iter().std_dev()
        };
        let (min, max) = self
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        Some(SeriesSummary {
            count: self.values.len(),
            mean: self.values.iter().mean(),
            std_dev,
            min,
            max,
        })
    }
}
