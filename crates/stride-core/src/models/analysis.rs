//! Aggregate fitness snapshot derived from run history.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// How much the analysis can be trusted, driven by history size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Fewer than 5 valid runs
    #[default]
    Low,

    /// Between 5 and 19 valid runs
    Medium,

    /// 20 or more valid runs
    High,
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Confidence::Low),
            "medium" => Ok(Confidence::Medium),
            "high" => Ok(Confidence::High),
            _ => Err(format!("Invalid confidence: {s}")),
        }
    }
}

impl Confidence {
    /// Lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// Direction of recent pace development.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FitnessTrend {
    Improving,
    #[default]
    Stable,
    Declining,
}

impl FromStr for FitnessTrend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "improving" => Ok(FitnessTrend::Improving),
            "stable" => Ok(FitnessTrend::Stable),
            "declining" => Ok(FitnessTrend::Declining),
            _ => Err(format!("Invalid fitness trend: {s}")),
        }
    }
}

impl FitnessTrend {
    /// Lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessTrend::Improving => "improving",
            FitnessTrend::Stable => "stable",
            FitnessTrend::Declining => "declining",
        }
    }
}

/// Fastest pace observed at a rounded distance bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BestEffort {
    /// Distance rounded to the nearest whole kilometer
    pub distance_km: u32,

    /// Pace in seconds per kilometer
    pub pace: f64,

    /// Date of the run that set this effort
    pub date: Date,
}

/// Aggregate fitness snapshot, computed once per generation request.
///
/// All paces are in seconds per kilometer; lower is faster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RunningAnalysis {
    /// Mean pace over all valid runs
    pub average_pace: f64,

    /// Fastest single-run pace
    pub best_pace: f64,

    /// Mean pace over the last three months
    pub recent_average_pace: f64,

    /// Number of valid runs analyzed
    pub total_runs: u32,

    /// Average weekly distance over the last eight weeks
    pub weekly_volume_km: f64,

    /// Longest single run
    pub longest_run_km: f64,

    /// Display hint derived from the best pace
    pub suggested_goal_pace: f64,

    /// Confidence tier
    pub confidence: Confidence,

    /// Human readable explanation of the confidence tier
    pub reasoning: String,

    /// Best recent effort per rounded distance, ascending by distance
    #[serde(default)]
    pub recent_best_efforts: Vec<BestEffort>,

    /// Recent pace trend
    pub fitness_trend: FitnessTrend,
}

impl RunningAnalysis {
    /// The analysis of an empty history.
    pub fn empty() -> Self {
        Self {
            reasoning: "No running data available".to_string(),
            ..Default::default()
        }
    }
}

/// Goal pace estimate for a race distance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalPaceEstimate {
    /// Race distance in kilometers
    pub race_distance_km: f64,

    /// Estimated goal pace in seconds per kilometer
    pub goal_pace_seconds_per_km: f64,

    /// Finishing time at the goal pace, in seconds
    pub predicted_time_seconds: f64,

    /// Confidence of the underlying analysis
    pub confidence: Confidence,

    /// Number of valid runs the estimate is based on
    pub based_on_runs: u32,
}
