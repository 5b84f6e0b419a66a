//! Race goal and runner constraints.

use std::str::FromStr;

use jiff::civil::{Date, Weekday};
use serde::{Deserialize, Serialize};

/// Maximum number of training days per week; one rest day is always kept.
pub const MAX_DAYS_PER_WEEK: u8 = 6;

/// Self-reported training experience.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl FromStr for Experience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Experience::Beginner),
            "intermediate" => Ok(Experience::Intermediate),
            "advanced" => Ok(Experience::Advanced),
            _ => Err(format!("Invalid training experience: {s}")),
        }
    }
}

impl Experience {
    /// Lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Beginner => "beginner",
            Experience::Intermediate => "intermediate",
            Experience::Advanced => "advanced",
        }
    }

    /// Training days per week assumed when the runner gives none.
    pub fn default_days_per_week(&self) -> u8 {
        match self {
            Experience::Beginner => 4,
            Experience::Intermediate | Experience::Advanced => 5,
        }
    }
}

/// Weekend day reserved for the long run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LongRunDay {
    Saturday,
    #[default]
    Sunday,
}

impl FromStr for LongRunDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "saturday" | "sat" => Ok(LongRunDay::Saturday),
            "sunday" | "sun" => Ok(LongRunDay::Sunday),
            _ => Err(format!("Invalid long run day: {s}")),
        }
    }
}

impl LongRunDay {
    /// Lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LongRunDay::Saturday => "saturday",
            LongRunDay::Sunday => "sunday",
        }
    }

    /// Calendar weekday of the long run.
    pub fn weekday(&self) -> Weekday {
        match self {
            LongRunDay::Saturday => Weekday::Saturday,
            LongRunDay::Sunday => Weekday::Sunday,
        }
    }

    /// Weekday of the base-phase strides session, kept clear of the days
    /// around the long run.
    pub fn strides_weekday(&self) -> Weekday {
        match self {
            LongRunDay::Saturday => Weekday::Tuesday,
            LongRunDay::Sunday => Weekday::Wednesday,
        }
    }
}

/// The runner's race goal and constraints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceInputs {
    /// Race distance in meters
    pub race_distance_meters: f64,

    /// Race day
    pub race_date: Date,

    /// Target finishing time in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_time_seconds: Option<f64>,

    /// Target pace in seconds per kilometer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_pace_seconds_per_km: Option<f64>,

    /// Current weekly mileage in kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_weekly_mileage_km: Option<f64>,

    /// Free-form injury notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_history: Option<String>,

    /// Training experience
    #[serde(default)]
    pub training_experience: Experience,

    /// Days per week the runner can train
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_days_per_week: Option<u8>,

    /// Preferred long run day
    #[serde(default)]
    pub preferred_long_run_day: LongRunDay,
}

impl RaceInputs {
    /// Creates race inputs with every optional field left at its default.
    pub fn new(race_distance_meters: f64, race_date: Date) -> Self {
        Self {
            race_distance_meters,
            race_date,
            goal_time_seconds: None,
            goal_pace_seconds_per_km: None,
            current_weekly_mileage_km: None,
            injury_history: None,
            training_experience: Experience::default(),
            available_days_per_week: None,
            preferred_long_run_day: LongRunDay::default(),
        }
    }

    /// Race distance in kilometers.
    pub fn race_distance_km(&self) -> f64 {
        self.race_distance_meters / 1000.0
    }

    /// Training days per week after defaults and the rest-day cap.
    pub fn days_per_week(&self) -> u8 {
        self.available_days_per_week
            .unwrap_or_else(|| self.training_experience.default_days_per_week())
            .clamp(1, MAX_DAYS_PER_WEEK)
    }
}
