//! Core library for the stride training plan generator.
//!
//! Given a runner's run history and a target race, stride produces a
//! periodized, day-by-day training plan. Plans move through base, build,
//! sharpening and taper phases, grow volume by at most 10% a week, insert a
//! recovery week every fourth week and target a goal pace extrapolated from
//! recent best efforts with Riegel's formula.
//!
//! # Pipeline
//!
//! - [`analyzer`]: run history into a [`models::RunningAnalysis`]
//! - [`goal_pace`]: goal pace from the analysis
//! - [`planner`]: phase structure, mileage progression, workout scheduling
//!   and assembly into [`models::TrainingWeek`]s
//!
//! The generator itself is synchronous and deterministic for a given
//! "today". The [`Planner`] facade adds run history loading, request
//! validation and the alternate strategy seam.
//!
//! # Quick Start
//!
//! ```rust
//! use stride_core::{PlannerBuilder, params::GeneratePlan};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_runs_path(Some("runs.json"))
//!     .with_today(Some(date(2026, 10, 18)))
//!     .build()?;
//!
//! let mut params = GeneratePlan::new(10_000.0, "2027-01-31");
//! params.training_experience = Some("beginner".to_string());
//!
//! let plan = planner.generate_plan(&params).await?;
//! for week in &plan.weeks {
//!     println!("{week}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod display;
pub mod error;
pub mod goal_pace;
pub mod models;
pub mod operations;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use analyzer::analyze_running_data;
pub use display::{format_pace, TrainingPlan};
pub use error::{PlannerError, Result};
pub use goal_pace::{estimate_goal_pace, riegel_formula};
pub use models::{
    GeneratedPlan, GoalPaceEstimate, RaceInputs, RunRecord, RunningAnalysis, TrainingWeek,
    TrainingWorkout,
};
pub use params::{EstimatePace, GeneratePlan};
pub use planner::{generate_training_plan, PlanStrategy, Planner, PlannerBuilder};
