//! Plan generation pipeline and the high-level [`Planner`] API.
//!
//! Data flows strictly forward through the submodules:
//!
//! ```text
//! ┌──────────┐   ┌───────────┐   ┌─────────────┐   ┌───────────┐   ┌───────────┐
//! │ analysis │──▶│ structure │──▶│ progression │──▶│ scheduler │──▶│ assembler │
//! │ + pace   │   │ (phases)  │   │ (volume)    │   │ (days)    │   │ (weeks)   │
//! └──────────┘   └───────────┘   └─────────────┘   └───────────┘   └───────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`structure`]: plan length, phase boundaries and the tier lookup tables
//! - [`progression`]: weekly volume and long run under the 10% rule,
//!   recovery weeks and the taper
//! - [`scheduler`]: concrete workouts on concrete days
//! - [`assembler`]: the fold over weeks, plus goal pace and mileage
//!   resolution
//! - [`strategy`]: the [`PlanStrategy`] seam and plan validation
//! - [`builder`]: configuration of [`Planner`] instances
//!
//! The [`Planner`] methods live in `run_ops` (history and analysis) and
//! `plan_ops` (plan generation).
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use stride_core::{PlannerBuilder, params::GeneratePlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_runs_path(Some("/data/runs.json"))
//!     .build()?;
//!
//! let plan = planner
//!     .generate_plan(&GeneratePlan::new(21_097.5, "2027-04-04"))
//!     .await?;
//! println!("{} weeks, goal pace {:.0} s/km", plan.weeks.len(), plan.goal_pace_seconds_per_km);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use jiff::{civil::Date, Zoned};

pub mod assembler;
pub mod builder;
pub mod progression;
pub mod scheduler;
pub mod strategy;
pub mod structure;

mod plan_ops;
mod run_ops;

#[cfg(test)]
mod tests;

pub use assembler::{generate_training_plan, resolve_current_mileage, resolve_goal_pace};
pub use builder::PlannerBuilder;
pub use progression::{MileageProgressor, PaceZones, ProgressionState, WeekTargets};
pub use scheduler::WorkoutScheduler;
pub use strategy::{validate_plan, PlanStrategy, RuleBasedStrategy};
pub use structure::{PlanStructure, RaceTier, MIN_TRAINING_WEEKS};

/// Main entry point: loads run history and generates plans.
pub struct Planner {
    pub(crate) runs_path: PathBuf,
    pub(crate) today: Option<Date>,
    pub(crate) strategy: Option<Arc<dyn PlanStrategy>>,
}

impl Planner {
    pub(crate) fn new(
        runs_path: PathBuf,
        today: Option<Date>,
        strategy: Option<Arc<dyn PlanStrategy>>,
    ) -> Self {
        Self {
            runs_path,
            today,
            strategy,
        }
    }

    /// Location of the run history file.
    pub fn runs_path(&self) -> &PathBuf {
        &self.runs_path
    }

    /// Reference date for windows and week boundaries: the pinned date, or
    /// the current date in the system time zone.
    pub fn today(&self) -> Date {
        self.today.unwrap_or_else(|| Zoned::now().date())
    }
}
