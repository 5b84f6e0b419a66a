//! Training plan model definitions.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{RaceInputs, RunningAnalysis};
use crate::planner::PlanStructure;

/// Periodization phase of a training week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Aerobic base building
    Base,

    /// Threshold work and rising volume
    Build,

    /// Race-specific intervals and race-pace work
    Sharpening,

    /// Volume reduction before race day
    Taper,
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "base" => Ok(Phase::Base),
            "build" => Ok(Phase::Build),
            "sharpening" => Ok(Phase::Sharpening),
            "taper" => Ok(Phase::Taper),
            _ => Err(format!("Invalid phase: {s}")),
        }
    }
}

impl Phase {
    /// Lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Base => "base",
            Phase::Build => "build",
            Phase::Sharpening => "sharpening",
            Phase::Taper => "taper",
        }
    }
}

/// Kind of training session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutType {
    Easy,
    Tempo,
    Interval,
    Long,
    Recovery,
    Race,
    Strides,
    RacePace,
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(WorkoutType::Easy),
            "tempo" => Ok(WorkoutType::Tempo),
            "interval" => Ok(WorkoutType::Interval),
            "long" => Ok(WorkoutType::Long),
            "recovery" => Ok(WorkoutType::Recovery),
            "race" => Ok(WorkoutType::Race),
            "strides" => Ok(WorkoutType::Strides),
            "race-pace" | "race_pace" | "racepace" => Ok(WorkoutType::RacePace),
            _ => Err(format!("Invalid workout type: {s}")),
        }
    }
}

impl WorkoutType {
    /// Serialized string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Easy => "easy",
            WorkoutType::Tempo => "tempo",
            WorkoutType::Interval => "interval",
            WorkoutType::Long => "long",
            WorkoutType::Recovery => "recovery",
            WorkoutType::Race => "race",
            WorkoutType::Strides => "strides",
            WorkoutType::RacePace => "race-pace",
        }
    }

    /// Quality sessions that need an easy day after them.
    pub fn is_hard(&self) -> bool {
        matches!(
            self,
            WorkoutType::Tempo | WorkoutType::Interval | WorkoutType::Strides | WorkoutType::RacePace
        )
    }
}

/// One scheduled training session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingWorkout {
    /// Weekday name of `date`
    pub day: String,

    /// Calendar date of the session
    pub date: Date,

    /// Kind of session
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,

    /// Distance in kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    /// Duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<u32>,

    /// Target pace, formatted as `M:SS/km`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,

    /// What to do
    pub description: String,

    /// Coaching cues
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One calendar week of the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingWeek {
    /// 1-based week number
    pub week_number: u32,

    /// First day of the week
    pub start_date: Date,

    /// Last day of the week (start + 6 days)
    pub end_date: Date,

    /// Target weekly distance in kilometers
    pub total_distance_km: f64,

    /// Periodization phase
    pub phase: Phase,

    /// Sessions ordered by date
    #[serde(default)]
    pub workouts: Vec<TrainingWorkout>,
}

impl TrainingWeek {
    /// Whether the given date falls inside this week.
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Sum of the scheduled workout distances.
    pub fn scheduled_distance_km(&self) -> f64 {
        self.workouts.iter().filter_map(|w| w.distance_km).sum()
    }

    /// Workouts of the given type.
    pub fn workouts_of(&self, workout_type: WorkoutType) -> impl Iterator<Item = &TrainingWorkout> {
        self.workouts
            .iter()
            .filter(move |w| w.workout_type == workout_type)
    }
}

/// A generated plan together with everything that went into it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedPlan {
    /// The race goal the plan was built for
    pub inputs: RaceInputs,

    /// Analysis of the run history at generation time
    pub analysis: RunningAnalysis,

    /// Resolved goal pace in seconds per kilometer
    pub goal_pace_seconds_per_km: f64,

    /// Phase lengths in weeks
    pub structure: PlanStructure,

    /// The weeks of the plan, in order
    pub weeks: Vec<TrainingWeek>,

    /// Name of the strategy that produced `weeks`
    pub strategy: String,
}

impl GeneratedPlan {
    /// Total planned distance over all weeks.
    pub fn total_distance_km(&self) -> f64 {
        self.weeks.iter().map(|w| w.total_distance_km).sum()
    }
}
