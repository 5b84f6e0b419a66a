//! Data models for run history, analysis, race goals and training plans.
//!
//! Display implementations for these models are located in
//! [`crate::display::models`] to keep data structures apart from
//! presentation.
//!
//! # Examples
//!
//! ```rust
//! use stride_core::models::{RaceInputs, LongRunDay, Experience};
//! use jiff::civil::date;
//!
//! let mut inputs = RaceInputs::new(10_000.0, date(2027, 3, 14));
//! inputs.training_experience = Experience::Beginner;
//! inputs.preferred_long_run_day = LongRunDay::Saturday;
//!
//! assert_eq!(inputs.race_distance_km(), 10.0);
//! assert_eq!(inputs.days_per_week(), 4);
//! ```

pub mod analysis;
pub mod plan;
pub mod race;
pub mod run;

#[cfg(test)]
mod tests;

pub use analysis::{BestEffort, Confidence, FitnessTrend, GoalPaceEstimate, RunningAnalysis};
pub use plan::{GeneratedPlan, Phase, TrainingWeek, TrainingWorkout, WorkoutType};
pub use race::{Experience, LongRunDay, RaceInputs, MAX_DAYS_PER_WEEK};
pub use run::RunRecord;
