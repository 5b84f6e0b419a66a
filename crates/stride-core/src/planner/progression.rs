//! Week-by-week mileage and long-run progression.
//!
//! The progression is a left fold: each week consumes the previous week's
//! [`ProgressionState`] and yields the next one, so no state outlives a
//! single plan generation.

use serde::{Deserialize, Serialize};

use super::structure::PlanStructure;
use crate::models::Phase;

/// Maximum week-over-week growth of volume and long run.
pub const WEEKLY_INCREASE_CAP: f64 = 1.10;

/// Volume of a recovery week relative to the week before.
pub const RECOVERY_WEEK_FACTOR: f64 = 0.75;

/// Long run of a recovery week relative to its normal value.
pub const RECOVERY_LONG_RUN_FACTOR: f64 = 0.8;

/// Every n-th non-taper week is a recovery week.
pub const RECOVERY_WEEK_INTERVAL: u32 = 4;

/// Floor of the starting weekly volume in km.
const MIN_START_MILEAGE_KM: f64 = 15.0;

/// Share of current volume the plan starts from.
const START_MILEAGE_FACTOR: f64 = 0.8;

/// Long run as a share of weekly volume at the start of the plan.
const START_LONG_RUN_SHARE: f64 = 0.25;

/// Cap of the seeded long run in km.
const MAX_SEED_LONG_RUN_KM: f64 = 5.0;

/// Final long run of a taper of three or more weeks, in km.
const FINAL_TAPER_LONG_RUN_KM: f64 = 3.0;

/// Training paces in seconds per km, fixed offsets from goal pace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceZones {
    pub easy: f64,
    pub long: f64,
    pub tempo: f64,
    pub interval: f64,
    pub race: f64,
}

impl PaceZones {
    /// Derives all zones from the goal race pace.
    pub fn from_goal_pace(goal_pace: f64) -> Self {
        Self {
            easy: goal_pace + 75.0,
            long: goal_pace + 75.0,
            tempo: goal_pace - 15.0,
            interval: goal_pace - 35.0,
            race: goal_pace,
        }
    }
}

/// Values carried from one week to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressionState {
    pub previous_week_mileage_km: f64,
    pub previous_long_run_km: f64,
}

impl ProgressionState {
    /// State before week 1.
    pub fn seed(start_mileage_km: f64) -> Self {
        Self {
            previous_week_mileage_km: start_mileage_km,
            previous_long_run_km: (start_mileage_km * START_LONG_RUN_SHARE)
                .min(MAX_SEED_LONG_RUN_KM),
        }
    }
}

/// Volume targets for one week, in full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekTargets {
    pub week_number: u32,
    pub phase: Phase,
    pub is_recovery_week: bool,
    pub mileage_km: f64,
    pub long_run_km: f64,
}

/// Computes weekly volume under the progression, recovery and taper rules.
#[derive(Debug, Clone, Copy)]
pub struct MileageProgressor {
    structure: PlanStructure,
    start_mileage_km: f64,
    peak_mileage_km: f64,
    max_long_run_km: f64,
}

impl MileageProgressor {
    pub fn new(
        structure: PlanStructure,
        start_mileage_km: f64,
        peak_mileage_km: f64,
        max_long_run_km: f64,
    ) -> Self {
        Self {
            structure,
            start_mileage_km,
            peak_mileage_km,
            max_long_run_km,
        }
    }

    /// Starting weekly volume for a runner currently doing
    /// `current_mileage_km`.
    pub fn start_mileage_for(current_mileage_km: f64) -> f64 {
        (current_mileage_km * START_MILEAGE_FACTOR).max(MIN_START_MILEAGE_KM)
    }

    pub fn start_mileage_km(&self) -> f64 {
        self.start_mileage_km
    }

    /// State before week 1.
    pub fn initial_state(&self) -> ProgressionState {
        ProgressionState::seed(self.start_mileage_km)
    }

    /// Recovery weeks fall on every fourth week outside the taper.
    pub fn is_recovery_week(week_number: u32, phase: Phase) -> bool {
        phase != Phase::Taper && week_number % RECOVERY_WEEK_INTERVAL == 0
    }

    /// Computes week `week_number` from the previous week's state.
    pub fn advance(
        &self,
        state: ProgressionState,
        week_number: u32,
    ) -> (WeekTargets, ProgressionState) {
        let phase = self.structure.phase_of(week_number);
        let is_recovery_week = Self::is_recovery_week(week_number, phase);
        let taper_index = self.structure.taper_index(week_number);
        let progress = self.progress(week_number);

        let mileage_km = match taper_index {
            Some(index) => state.previous_week_mileage_km * taper_volume_factor(index),
            None if is_recovery_week => state.previous_week_mileage_km * RECOVERY_WEEK_FACTOR,
            None => {
                let target = self.start_mileage_km
                    + (self.peak_mileage_km - self.start_mileage_km) * progress;
                target
                    .min(state.previous_week_mileage_km * WEEKLY_INCREASE_CAP)
                    .min(self.peak_mileage_km)
            }
        };

        let mut long_run_km = match taper_index {
            Some(1) => state.previous_long_run_km * 0.5,
            Some(2) => state.previous_long_run_km * 0.3,
            Some(_) => FINAL_TAPER_LONG_RUN_KM,
            None => {
                let start_long_run = self.start_mileage_km * START_LONG_RUN_SHARE;
                let target = (start_long_run + (self.max_long_run_km - start_long_run) * progress)
                    .min(self.max_long_run_km);
                target
                    .min(state.previous_long_run_km * WEEKLY_INCREASE_CAP)
                    .min(self.max_long_run_km)
            }
        };

        if is_recovery_week {
            long_run_km *= RECOVERY_LONG_RUN_FACTOR;
        }

        // The long run is part of the week's volume.
        let long_run_km = long_run_km.min(mileage_km).min(self.max_long_run_km);

        let targets = WeekTargets {
            week_number,
            phase,
            is_recovery_week,
            mileage_km,
            long_run_km,
        };
        let next = ProgressionState {
            previous_week_mileage_km: mileage_km,
            previous_long_run_km: long_run_km,
        };
        (targets, next)
    }

    /// Linear progress through the non-taper weeks, 0 at week 1.
    fn progress(&self, week_number: u32) -> f64 {
        let span = self.structure.non_taper_weeks().saturating_sub(1).max(1);
        f64::from(week_number.saturating_sub(1)) / f64::from(span)
    }
}

/// Volume of a taper week relative to the week before it.
fn taper_volume_factor(taper_index: u32) -> f64 {
    match taper_index {
        1 => 0.6,
        2 => 0.4,
        _ => 0.2,
    }
}
