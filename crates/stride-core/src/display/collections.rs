//! Wrapper types for displaying whole plans.

use std::fmt;

use super::{datetime::LongDate, pace::format_pace};
use crate::models::GeneratedPlan;

/// Text export of a generated plan: race summary followed by every week.
///
/// # Examples
///
/// ```rust
/// use stride_core::{
///     display::TrainingPlan,
///     models::{GeneratedPlan, RaceInputs, RunningAnalysis},
///     planner::{generate_training_plan, PlanStructure},
/// };
/// use jiff::civil::date;
///
/// let inputs = RaceInputs::new(5000.0, date(2026, 12, 27));
/// let weeks = generate_training_plan(&inputs, &RunningAnalysis::empty(), date(2026, 10, 18))?;
/// let plan = GeneratedPlan {
///     inputs,
///     analysis: RunningAnalysis::empty(),
///     goal_pace_seconds_per_km: 360.0,
///     structure: PlanStructure::new(weeks.len() as u32),
///     weeks,
///     strategy: "rule-based".to_string(),
/// };
///
/// let output = TrainingPlan(&plan).to_string();
/// assert!(output.contains("- Race date: December 27, 2026"));
/// assert!(output.contains("## Week 1 (base)"));
/// # Ok::<(), stride_core::PlannerError>(())
/// ```
pub struct TrainingPlan<'a>(pub &'a GeneratedPlan);

impl fmt::Display for TrainingPlan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let structure = &plan.structure;

        writeln!(f, "# Training Plan")?;
        writeln!(f)?;
        writeln!(f, "- Race distance: {} km", plan.inputs.race_distance_km())?;
        writeln!(f, "- Race date: {}", LongDate(plan.inputs.race_date))?;
        writeln!(f, "- Goal pace: {}", format_pace(plan.goal_pace_seconds_per_km))?;
        writeln!(
            f,
            "- Weeks: {} (base {}, build {}, sharpening {}, taper {})",
            plan.weeks.len(),
            structure.base,
            structure.build,
            structure.sharpening,
            structure.taper
        )?;
        writeln!(f, "- Total distance: {:.1} km", plan.total_distance_km())?;
        writeln!(f, "- Experience: {}", plan.inputs.training_experience)?;
        if let Some(injuries) = &plan.inputs.injury_history {
            writeln!(f, "- Injury history: {injuries}")?;
        }
        writeln!(f, "- Generated by: {}", plan.strategy)?;
        writeln!(f)?;

        for week in &plan.weeks {
            write!(f, "{week}")?;
        }
        Ok(())
    }
}
