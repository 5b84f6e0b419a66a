//! Folds progression and scheduling across the weeks of a plan.

use jiff::{civil::Date, ToSpan};
use log::debug;

use super::{
    progression::{MileageProgressor, PaceZones},
    scheduler::{round_tenth, WorkoutScheduler},
    structure::{max_long_run_km, target_peak_mileage_km, PlanStructure},
};
use crate::{
    error::Result,
    goal_pace::estimate_goal_pace,
    models::{RaceInputs, RunningAnalysis, TrainingWeek},
};

/// Goal pace assumed when neither the runner nor the history supplies one
/// (6:00/km).
pub const DEFAULT_GOAL_PACE: f64 = 360.0;

/// Current weekly volume assumed when nothing is known, in km.
pub const DEFAULT_CURRENT_MILEAGE_KM: f64 = 20.0;

/// Whole days from `today` until race day. Negative for past races.
pub fn days_until_race(inputs: &RaceInputs, today: Date) -> Result<i64> {
    Ok(i64::from(today.until(inputs.race_date)?.get_days()))
}

/// Phase structure for the race as seen from `today`.
///
/// # Errors
///
/// Returns `PlannerError::InsufficientLeadTime` when the race is too close.
pub fn plan_structure(inputs: &RaceInputs, today: Date) -> Result<PlanStructure> {
    let days = days_until_race(inputs, today)?;
    let structure =
        PlanStructure::for_race(inputs.race_distance_km(), inputs.training_experience, days)?;
    debug!(
        "{} days until race, plan structure {}/{}/{}/{}",
        days, structure.base, structure.build, structure.sharpening, structure.taper
    );
    Ok(structure)
}

/// Goal pace in seconds per km: explicit pace, then goal time, then the
/// estimate from history.
pub fn resolve_goal_pace(inputs: &RaceInputs, analysis: &RunningAnalysis) -> f64 {
    let race_distance_km = inputs.race_distance_km();
    let pace = inputs
        .goal_pace_seconds_per_km
        .or_else(|| inputs.goal_time_seconds.map(|time| time / race_distance_km))
        .unwrap_or_else(|| estimate_goal_pace(race_distance_km, analysis));

    if pace.is_finite() && pace > 0.0 {
        pace
    } else {
        DEFAULT_GOAL_PACE
    }
}

/// Current weekly volume in km: as reported, then as measured, then the
/// default. A reported volume of zero counts as not reported.
pub fn resolve_current_mileage(inputs: &RaceInputs, analysis: &RunningAnalysis) -> f64 {
    inputs
        .current_weekly_mileage_km
        .filter(|&km| km > 0.0)
        .or((analysis.weekly_volume_km > 0.0).then_some(analysis.weekly_volume_km))
        .unwrap_or(DEFAULT_CURRENT_MILEAGE_KM)
}

/// Generates the full week-by-week plan.
///
/// # Errors
///
/// Returns `PlannerError::InsufficientLeadTime` when fewer than eight
/// training weeks fit before race day.
///
/// # Examples
///
/// ```rust
/// use stride_core::{
///     generate_training_plan,
///     models::{RaceInputs, RunningAnalysis, WorkoutType},
/// };
/// use jiff::civil::date;
///
/// let inputs = RaceInputs::new(10_000.0, date(2027, 1, 31));
/// let weeks = generate_training_plan(&inputs, &RunningAnalysis::empty(), date(2026, 10, 18))?;
///
/// let last = weeks.last().expect("plan has weeks");
/// assert_eq!(last.end_date, date(2027, 1, 31));
/// assert_eq!(last.workouts_of(WorkoutType::Race).count(), 1);
/// # Ok::<(), stride_core::PlannerError>(())
/// ```
pub fn generate_training_plan(
    inputs: &RaceInputs,
    analysis: &RunningAnalysis,
    today: Date,
) -> Result<Vec<TrainingWeek>> {
    let structure = plan_structure(inputs, today)?;
    assemble_weeks(
        inputs,
        structure,
        resolve_goal_pace(inputs, analysis),
        resolve_current_mileage(inputs, analysis),
    )
}

/// Builds the weeks of an already validated structure.
///
/// Weeks are anchored so that the last one ends on race day.
pub fn assemble_weeks(
    inputs: &RaceInputs,
    structure: PlanStructure,
    goal_pace: f64,
    current_mileage_km: f64,
) -> Result<Vec<TrainingWeek>> {
    let race_distance_km = inputs.race_distance_km();
    let total_weeks = structure.total_weeks();

    let progressor = MileageProgressor::new(
        structure,
        MileageProgressor::start_mileage_for(current_mileage_km),
        target_peak_mileage_km(race_distance_km, inputs.training_experience),
        max_long_run_km(race_distance_km),
    );
    let scheduler = WorkoutScheduler::new(
        race_distance_km,
        inputs.days_per_week(),
        inputs.preferred_long_run_day,
        PaceZones::from_goal_pace(goal_pace),
        structure.base,
    );

    let plan_start = inputs
        .race_date
        .checked_sub((7 * i64::from(total_weeks) - 1).days())?;

    let (weeks, _) = (1..=total_weeks).try_fold(
        (
            Vec::with_capacity(total_weeks as usize),
            progressor.initial_state(),
        ),
        |(mut weeks, state), week_number| -> Result<_> {
            let (targets, next) = progressor.advance(state, week_number);

            let start_date =
                plan_start.checked_add((7 * i64::from(week_number - 1)).days())?;
            let end_date = start_date.checked_add(6.days())?;
            let race_date = (week_number == total_weeks).then_some(inputs.race_date);

            weeks.push(TrainingWeek {
                week_number,
                start_date,
                end_date,
                total_distance_km: round_tenth(targets.mileage_km),
                phase: targets.phase,
                workouts: scheduler.schedule(&targets, start_date, race_date)?,
            });
            Ok((weeks, next))
        },
    )?;

    Ok(weeks)
}
