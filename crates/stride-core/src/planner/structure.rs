//! Plan length and phase boundaries.

use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::{Experience, Phase},
};

/// Shortest plan the generator will build.
pub const MIN_TRAINING_WEEKS: u32 = 8;

/// Race distance tier used to key every lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceTier {
    /// Up to 5 km
    FiveK,
    /// Up to 10 km
    TenK,
    /// Up to 21.1 km
    Half,
    /// Anything longer
    Marathon,
}

impl RaceTier {
    /// Tier of a race distance in kilometers.
    pub fn from_distance_km(race_distance_km: f64) -> Self {
        if race_distance_km <= 5.0 {
            RaceTier::FiveK
        } else if race_distance_km <= 10.0 {
            RaceTier::TenK
        } else if race_distance_km <= 21.1 {
            RaceTier::Half
        } else {
            RaceTier::Marathon
        }
    }
}

/// Weekly distance the plan builds towards, in km.
pub fn target_peak_mileage_km(race_distance_km: f64, experience: Experience) -> f64 {
    use Experience::*;
    use RaceTier::*;

    match (RaceTier::from_distance_km(race_distance_km), experience) {
        (FiveK, Beginner) => 30.0,
        (FiveK, Intermediate) => 40.0,
        (FiveK, Advanced) => 50.0,
        (TenK, Beginner) => 35.0,
        (TenK, Intermediate) => 45.0,
        (TenK, Advanced) => 55.0,
        (Half, Beginner) => 40.0,
        (Half, Intermediate) => 50.0,
        (Half, Advanced) => 60.0,
        (Marathon, Beginner) => 50.0,
        (Marathon, Intermediate) => 70.0,
        (Marathon, Advanced) => 90.0,
    }
}

/// Ideal plan length in weeks.
pub fn training_duration_weeks(race_distance_km: f64, experience: Experience) -> u32 {
    let beginner = experience == Experience::Beginner;
    match RaceTier::from_distance_km(race_distance_km) {
        RaceTier::FiveK => if beginner { 8 } else { 10 },
        RaceTier::TenK => if beginner { 10 } else { 12 },
        RaceTier::Half => if beginner { 12 } else { 16 },
        RaceTier::Marathon => if beginner { 16 } else { 18 },
    }
}

/// Longest long run the plan prescribes, in km.
pub fn max_long_run_km(race_distance_km: f64) -> f64 {
    match RaceTier::from_distance_km(race_distance_km) {
        RaceTier::FiveK => 8.0,
        RaceTier::TenK => 12.0,
        RaceTier::Half => race_distance_km * 0.9,
        RaceTier::Marathon => 32.0,
    }
}

/// Number of weeks in each phase. Phases are contiguous and in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStructure {
    pub base: u32,
    pub build: u32,
    pub sharpening: u32,
    pub taper: u32,
}

impl PlanStructure {
    /// Splits `training_weeks` into phases: 35% base, 35% build, 20%
    /// sharpening, with the taper absorbing the rounding remainder.
    pub fn new(training_weeks: u32) -> Self {
        let base = training_weeks * 35 / 100;
        let build = training_weeks * 35 / 100;
        let sharpening = training_weeks * 20 / 100;
        Self {
            base,
            build,
            sharpening,
            taper: training_weeks - base - build - sharpening,
        }
    }

    /// Plans as long as the race allows, up to the optimal duration.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InsufficientLeadTime` when fewer than
    /// [`MIN_TRAINING_WEEKS`] weeks fit before race day.
    pub fn for_race(
        race_distance_km: f64,
        experience: Experience,
        days_until_race: i64,
    ) -> Result<Self> {
        let optimal = i64::from(training_duration_weeks(race_distance_km, experience));
        let available = days_until_race.div_euclid(7);
        let training_weeks = optimal.min(available);

        if training_weeks < i64::from(MIN_TRAINING_WEEKS) {
            return Err(PlannerError::InsufficientLeadTime {
                available_weeks: training_weeks,
                required_weeks: MIN_TRAINING_WEEKS,
            });
        }

        Ok(Self::new(u32::try_from(training_weeks).unwrap_or(MIN_TRAINING_WEEKS)))
    }

    /// Total plan length.
    pub fn total_weeks(&self) -> u32 {
        self.base + self.build + self.sharpening + self.taper
    }

    /// Weeks before the taper starts.
    pub fn non_taper_weeks(&self) -> u32 {
        self.base + self.build + self.sharpening
    }

    /// Phase of a 1-based week number.
    pub fn phase_of(&self, week_number: u32) -> Phase {
        if week_number <= self.base {
            Phase::Base
        } else if week_number <= self.base + self.build {
            Phase::Build
        } else if week_number <= self.non_taper_weeks() {
            Phase::Sharpening
        } else {
            Phase::Taper
        }
    }

    /// 1-based position of a week inside the taper, if it is a taper week.
    pub fn taper_index(&self, week_number: u32) -> Option<u32> {
        week_number
            .checked_sub(self.non_taper_weeks())
            .filter(|index| *index > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_k_beginner_scenario() {
        let structure = PlanStructure::for_race(5.0, Experience::Beginner, 70)
            .expect("70 days is enough for a 5K");

        assert_eq!(
            structure,
            PlanStructure {
                base: 2,
                build: 2,
                sharpening: 1,
                taper: 3
            }
        );
        assert_eq!(structure.total_weeks(), 8);
    }

    #[test]
    fn test_marathon_with_forty_days_fails() {
        let err = PlanStructure::for_race(42.195, Experience::Beginner, 40)
            .expect_err("five weeks is too short");

        assert!(matches!(
            err,
            PlannerError::InsufficientLeadTime {
                available_weeks: 5,
                required_weeks: 8
            }
        ));
    }

    #[test]
    fn test_race_in_the_past_fails() {
        let err = PlanStructure::for_race(10.0, Experience::Advanced, -3)
            .expect_err("past race");
        assert!(matches!(err, PlannerError::InsufficientLeadTime { .. }));
    }

    #[test]
    fn test_optimal_duration_caps_plan_length() {
        let structure = PlanStructure::for_race(21.1, Experience::Intermediate, 365)
            .expect("plenty of time");
        assert_eq!(structure.total_weeks(), 16);
    }

    #[test]
    fn test_phases_always_sum_to_total() {
        for weeks in MIN_TRAINING_WEEKS..=18 {
            let structure = PlanStructure::new(weeks);
            assert_eq!(structure.total_weeks(), weeks, "weeks = {weeks}");
            assert!(structure.taper >= 1);
        }
    }

    #[test]
    fn test_phase_boundaries_are_contiguous() {
        let structure = PlanStructure::new(10); // 3/3/2/2
        let phases: Vec<Phase> = (1..=10).map(|w| structure.phase_of(w)).collect();

        assert_eq!(
            phases,
            vec![
                Phase::Base,
                Phase::Base,
                Phase::Base,
                Phase::Build,
                Phase::Build,
                Phase::Build,
                Phase::Sharpening,
                Phase::Sharpening,
                Phase::Taper,
                Phase::Taper,
            ]
        );
        assert_eq!(structure.taper_index(8), None);
        assert_eq!(structure.taper_index(9), Some(1));
        assert_eq!(structure.taper_index(10), Some(2));
    }

    #[test]
    fn test_lookup_tables() {
        assert_eq!(target_peak_mileage_km(5.0, Experience::Beginner), 30.0);
        assert_eq!(target_peak_mileage_km(10.0, Experience::Advanced), 55.0);
        assert_eq!(target_peak_mileage_km(21.1, Experience::Intermediate), 50.0);
        assert_eq!(target_peak_mileage_km(42.195, Experience::Advanced), 90.0);

        assert_eq!(training_duration_weeks(5.0, Experience::Advanced), 10);
        assert_eq!(training_duration_weeks(42.195, Experience::Beginner), 16);

        assert_eq!(max_long_run_km(5.0), 8.0);
        assert_eq!(max_long_run_km(10.0), 12.0);
        assert!((max_long_run_km(21.0975) - 18.98775).abs() < 1e-9);
        assert_eq!(max_long_run_km(42.195), 32.0);
    }
}
