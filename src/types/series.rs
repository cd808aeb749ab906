//! Time-series classification outputs

use serde::{Deserialize, Serialize};

/// Coarse direction of a series from comparing the means of its two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Fewer than two points
    InsufficientData,
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn display_name(&self) -> &'static str {
        match self {
            Trend::InsufficientData => "Insufficient data",
            Trend::Increasing => "Increasing",
            Trend::Decreasing => "Decreasing",
            Trend::Stable => "Stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Descriptive statistics over a whole series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n-1); 0.0 for a single point
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}
