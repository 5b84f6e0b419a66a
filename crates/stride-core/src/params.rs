//! Parameter structures for stride operations.
//!
//! These are the raw, unvalidated requests shared by the command line and
//! the MCP server. Interface layers wrap them with their own derives (clap
//! arguments, transparent serde wrappers) and convert into them; the
//! [`operations`](crate::operations) module validates them into domain
//! types.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schemas for the MCP tools are derived behind the `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for estimating a goal pace from run history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EstimatePace {
    /// Race distance in meters (e.g. 5000, 10000, 21097.5, 42195)
    pub race_distance_meters: f64,
}

/// Parameters for generating a training plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GeneratePlan {
    /// Race distance in meters (e.g. 5000, 10000, 21097.5, 42195)
    pub race_distance_meters: f64,
    /// Race day as YYYY-MM-DD
    pub race_date: String,
    /// Target finishing time in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_time_seconds: Option<f64>,
    /// Target pace in seconds per kilometer; takes precedence over the goal
    /// time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_pace_seconds_per_km: Option<f64>,
    /// Current weekly distance in kilometers; measured from history when
    /// omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_weekly_mileage_km: Option<f64>,
    /// Free-form notes about past injuries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_history: Option<String>,
    /// 'beginner', 'intermediate' (default) or 'advanced'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_experience: Option<String>,
    /// Training days per week (1-7, at most 6 are scheduled)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_days_per_week: Option<u8>,
    /// 'saturday' or 'sunday' (default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_long_run_day: Option<String>,
}

impl GeneratePlan {
    /// Minimal request for a race distance and date.
    pub fn new(race_distance_meters: f64, race_date: impl Into<String>) -> Self {
        Self {
            race_distance_meters,
            race_date: race_date.into(),
            ..Default::default()
        }
    }
}
