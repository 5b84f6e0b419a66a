//! Swappable plan generation strategies.
//!
//! The rule-based generator is always available and is the fallback for any
//! alternate strategy that fails or returns a plan that does not hold up.

use jiff::civil::Date;
use log::{info, warn};

use super::assembler::generate_training_plan;
use crate::{
    error::Result,
    models::{RaceInputs, RunRecord, RunningAnalysis, TrainingWeek, WorkoutType},
};

/// A source of training plans.
pub trait PlanStrategy: Send + Sync {
    /// Short name used in logs and in the generated plan envelope.
    fn name(&self) -> &str;

    /// Generates a plan for the race.
    fn generate(
        &self,
        inputs: &RaceInputs,
        analysis: &RunningAnalysis,
        runs: &[RunRecord],
    ) -> Result<Vec<TrainingWeek>>;
}

/// The deterministic periodized generator.
#[derive(Debug, Clone, Copy)]
pub struct RuleBasedStrategy {
    today: Date,
}

impl RuleBasedStrategy {
    pub const NAME: &'static str = "rule-based";

    pub fn new(today: Date) -> Self {
        Self { today }
    }
}

impl PlanStrategy for RuleBasedStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn generate(
        &self,
        inputs: &RaceInputs,
        analysis: &RunningAnalysis,
        _runs: &[RunRecord],
    ) -> Result<Vec<TrainingWeek>> {
        generate_training_plan(inputs, analysis, self.today)
    }
}

/// Checks the structural guarantees every plan must give.
///
/// Returns a description of the first defect found.
pub fn validate_plan(weeks: &[TrainingWeek], inputs: &RaceInputs) -> std::result::Result<(), String> {
    let Some(last) = weeks.last() else {
        return Err("plan has no weeks".to_string());
    };

    for (index, week) in weeks.iter().enumerate() {
        let expected = index + 1;
        if week.week_number as usize != expected {
            return Err(format!(
                "week {} is out of order, expected week {expected}",
                week.week_number
            ));
        }
        if let Some(workout) = week.workouts.iter().find(|w| !week.contains(w.date)) {
            return Err(format!(
                "week {} has a workout on {} outside {}..{}",
                week.week_number, workout.date, week.start_date, week.end_date
            ));
        }
        if week.workouts.windows(2).any(|pair| pair[0].date > pair[1].date) {
            return Err(format!("week {} workouts are not sorted by date", week.week_number));
        }
    }

    let races: Vec<_> = last.workouts_of(WorkoutType::Race).collect();
    match races.as_slice() {
        [race] if race.date == inputs.race_date => Ok(()),
        [race] => Err(format!(
            "race is scheduled on {} instead of {}",
            race.date, inputs.race_date
        )),
        _ => Err(format!(
            "final week has {} race workouts, expected exactly one",
            races.len()
        )),
    }
}

/// Runs `alternate` when given and falls back to `fallback` when it fails or
/// its plan is invalid. Returns the weeks and the name of the strategy that
/// produced them.
///
/// Errors from `fallback` are returned as is.
pub fn generate_with_fallback(
    alternate: Option<&dyn PlanStrategy>,
    fallback: &dyn PlanStrategy,
    inputs: &RaceInputs,
    analysis: &RunningAnalysis,
    runs: &[RunRecord],
) -> Result<(Vec<TrainingWeek>, String)> {
    if let Some(strategy) = alternate {
        match strategy.generate(inputs, analysis, runs) {
            Ok(weeks) => match validate_plan(&weeks, inputs) {
                Ok(()) => {
                    info!("Generated {} week plan with '{}'", weeks.len(), strategy.name());
                    return Ok((weeks, strategy.name().to_string()));
                }
                Err(defect) => warn!(
                    "Plan from '{}' rejected ({defect}), falling back to '{}'",
                    strategy.name(),
                    fallback.name()
                ),
            },
            Err(e) => warn!(
                "Strategy '{}' failed ({e}), falling back to '{}'",
                strategy.name(),
                fallback.name()
            ),
        }
    }

    let weeks = fallback.generate(inputs, analysis, runs)?;
    info!("Generated {} week plan with '{}'", weeks.len(), fallback.name());
    Ok((weeks, fallback.name().to_string()))
}
