//! Assignment of concrete workouts to the days of a week.

use jiff::{
    civil::{Date, Weekday},
    ToSpan,
};

use super::{
    progression::{PaceZones, WeekTargets},
    structure::RaceTier,
};
use crate::{
    display::{format_pace, weekday_name},
    error::Result,
    models::{LongRunDay, Phase, TrainingWorkout, WorkoutType},
};

/// Weekday of build and sharpening quality sessions.
const QUALITY_WEEKDAY: Weekday = Weekday::Wednesday;

/// Easy distance of the strides session in km.
const STRIDES_DISTANCE_KM: f64 = 5.0;

/// Total distance of an interval or race-pace session in km.
const QUALITY_SESSION_DISTANCE_KM: f64 = 8.0;

/// Share of a fast-finish long run run at long-run pace.
const FAST_FINISH_EASY_SHARE: f64 = 0.75;

const TEMPO_START_MIN: u32 = 15;
const TEMPO_STEP_MIN: u32 = 2;
const TEMPO_MAX_MIN: u32 = 30;

/// Interval session for a race tier.
fn interval_recipe(tier: RaceTier) -> &'static str {
    match tier {
        RaceTier::FiveK => "6x 800m at 5K pace with 2min recovery jog",
        RaceTier::TenK => "5x 1km at 10K pace with 2min recovery jog",
        RaceTier::Half | RaceTier::Marathon => {
            "4x 1.6km at half marathon pace with 3min recovery jog"
        }
    }
}

/// Race-pace segment session for a race tier.
fn race_pace_recipe(tier: RaceTier) -> &'static str {
    match tier {
        RaceTier::FiveK => {
            "2km easy warmup, 3x 1km at goal pace with 2min recovery, 1km cooldown"
        }
        RaceTier::TenK => {
            "2km easy warmup, 2x 2km at goal pace with 3min recovery, 1km cooldown"
        }
        RaceTier::Half | RaceTier::Marathon => {
            "3km easy warmup, 2x 3km at goal pace with 4min recovery, 2km cooldown"
        }
    }
}

/// Rounds to one decimal place.
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Places the week's workouts on calendar days.
#[derive(Debug, Clone)]
pub struct WorkoutScheduler {
    race_distance_km: f64,
    tier: RaceTier,
    days_per_week: u8,
    long_run_day: LongRunDay,
    zones: PaceZones,
    base_weeks: u32,
}

impl WorkoutScheduler {
    pub fn new(
        race_distance_km: f64,
        days_per_week: u8,
        long_run_day: LongRunDay,
        zones: PaceZones,
        base_weeks: u32,
    ) -> Self {
        Self {
            race_distance_km,
            tier: RaceTier::from_distance_km(race_distance_km),
            days_per_week,
            long_run_day,
            zones,
            base_weeks,
        }
    }

    /// Builds the workouts of one week starting on `start_date`.
    ///
    /// `race_date` is only given for the final week; that day is reserved
    /// for the race.
    pub fn schedule(
        &self,
        targets: &WeekTargets,
        start_date: Date,
        race_date: Option<Date>,
    ) -> Result<Vec<TrainingWorkout>> {
        let dates = week_dates(start_date)?;
        let date_of = |weekday: Weekday| {
            dates
                .iter()
                .copied()
                .find(|date| date.weekday() == weekday)
                .unwrap_or(start_date)
        };

        let mut workouts = vec![self.long_run(targets, date_of(self.long_run_day.weekday()))];

        workouts.extend(self.hard_session(targets, &date_of));

        if let Some(race_date) = race_date {
            workouts.retain(|w| w.date != race_date);
        }

        self.fill_easy_days(&mut workouts, targets.mileage_km, &dates, race_date);

        if let Some(race_date) = race_date {
            workouts.push(self.race_day(race_date));
        }

        workouts.sort_by_key(|w| w.date);
        Ok(workouts)
    }

    fn long_run(&self, targets: &WeekTargets, date: Date) -> TrainingWorkout {
        let distance = targets.long_run_km;
        let fast_finish = targets.phase == Phase::Sharpening
            && targets.week_number % 2 == 0
            && !targets.is_recovery_week;

        if fast_finish {
            let easy_km = distance * FAST_FINISH_EASY_SHARE;
            let long_pace = format_pace(self.zones.long);
            let race_pace = format_pace(self.zones.race);
            TrainingWorkout {
                day: weekday_name(date.weekday()).to_string(),
                date,
                workout_type: WorkoutType::Long,
                distance_km: Some(round_tenth(distance)),
                duration_min: None,
                pace: Some(format!("{long_pace} → {race_pace}")),
                description: format!(
                    "Long run with fast finish. Run the first {:.1}km at {long_pace}, \
                     then the last {:.1}km at goal pace {race_pace}.",
                    easy_km,
                    distance - easy_km
                ),
                notes: Some("Practice race day pacing. Finish strong but controlled.".to_string()),
            }
        } else {
            TrainingWorkout {
                day: weekday_name(date.weekday()).to_string(),
                date,
                workout_type: WorkoutType::Long,
                distance_km: Some(round_tenth(distance)),
                duration_min: None,
                pace: Some(format_pace(self.zones.long)),
                description: "Long run at easy pace. Build aerobic endurance.".to_string(),
                notes: Some("Conversation pace. Focus on time on feet, not speed.".to_string()),
            }
        }
    }

    /// At most one quality session per week, chosen by phase.
    fn hard_session(
        &self,
        targets: &WeekTargets,
        date_of: &impl Fn(Weekday) -> Date,
    ) -> Option<TrainingWorkout> {
        match targets.phase {
            Phase::Base if self.days_per_week >= 4 => {
                let date = date_of(self.long_run_day.strides_weekday());
                Some(TrainingWorkout {
                    day: weekday_name(date.weekday()).to_string(),
                    date,
                    workout_type: WorkoutType::Strides,
                    distance_km: Some(STRIDES_DISTANCE_KM),
                    duration_min: None,
                    pace: Some(format_pace(self.zones.easy)),
                    description: "Easy 5km run with 4-6x 100m strides.".to_string(),
                    notes: Some(
                        "Strides should feel fast but controlled. Full recovery between."
                            .to_string(),
                    ),
                })
            }
            Phase::Base | Phase::Taper => None,
            Phase::Build => {
                let date = date_of(QUALITY_WEEKDAY);
                let weeks_into_build = targets.week_number.saturating_sub(self.base_weeks);
                let duration = (TEMPO_START_MIN + weeks_into_build * TEMPO_STEP_MIN).min(TEMPO_MAX_MIN);
                Some(TrainingWorkout {
                    day: weekday_name(date.weekday()).to_string(),
                    date,
                    workout_type: WorkoutType::Tempo,
                    distance_km: None,
                    duration_min: Some(duration),
                    pace: Some(format_pace(self.zones.tempo)),
                    description: format!("Tempo run: {duration} minutes at threshold pace."),
                    notes: Some(
                        "Comfortably hard effort. Should feel challenging but sustainable."
                            .to_string(),
                    ),
                })
            }
            Phase::Sharpening => {
                let date = date_of(QUALITY_WEEKDAY);
                let workout = if targets.week_number % 2 == 1 {
                    TrainingWorkout {
                        day: weekday_name(date.weekday()).to_string(),
                        date,
                        workout_type: WorkoutType::Interval,
                        distance_km: Some(QUALITY_SESSION_DISTANCE_KM),
                        duration_min: None,
                        pace: Some(format_pace(self.zones.interval)),
                        description: format!("Interval workout: {}.", interval_recipe(self.tier)),
                        notes: Some(
                            "Focus on form and pace control. Full recovery between intervals."
                                .to_string(),
                        ),
                    }
                } else {
                    TrainingWorkout {
                        day: weekday_name(date.weekday()).to_string(),
                        date,
                        workout_type: WorkoutType::RacePace,
                        distance_km: Some(QUALITY_SESSION_DISTANCE_KM),
                        duration_min: None,
                        pace: Some(format_pace(self.zones.race)),
                        description: format!("Race pace workout: {}.", race_pace_recipe(self.tier)),
                        notes: Some(
                            "Practice goal pace. Should feel comfortable and controlled."
                                .to_string(),
                        ),
                    }
                };
                Some(workout)
            }
        }
    }

    /// Spreads the remaining volume evenly over free days until the week
    /// holds `days_per_week` sessions.
    fn fill_easy_days(
        &self,
        workouts: &mut Vec<TrainingWorkout>,
        mileage_km: f64,
        dates: &[Date],
        race_date: Option<Date>,
    ) {
        let sessions = usize::from(self.days_per_week);
        let open_slots = sessions.saturating_sub(workouts.len());
        if open_slots == 0 {
            return;
        }

        let scheduled_km: f64 = workouts.iter().filter_map(|w| w.distance_km).sum();
        let per_run_km = ((mileage_km - scheduled_km) / open_slots as f64).max(0.0);
        let distance = round_tenth(per_run_km);
        if distance <= 0.0 {
            return;
        }

        // Days after the long run or a quality session are recovery days.
        let mut demanding: Vec<Weekday> = workouts
            .iter()
            .filter(|w| w.workout_type.is_hard())
            .map(|w| w.date.weekday())
            .collect();
        demanding.push(self.long_run_day.weekday());

        let mut used: Vec<Date> = workouts.iter().map(|w| w.date).collect();
        used.extend(race_date);

        for &date in dates {
            if workouts.len() >= sessions {
                break;
            }
            if used.contains(&date) {
                continue;
            }

            workouts.push(if demanding.contains(&date.weekday().previous()) {
                TrainingWorkout {
                    day: weekday_name(date.weekday()).to_string(),
                    date,
                    workout_type: WorkoutType::Recovery,
                    distance_km: Some(distance),
                    duration_min: None,
                    pace: Some(format_pace(self.zones.easy)),
                    description: "Recovery run. Very easy pace.".to_string(),
                    notes: Some("Focus on recovery. Very slow and relaxed.".to_string()),
                }
            } else {
                TrainingWorkout {
                    day: weekday_name(date.weekday()).to_string(),
                    date,
                    workout_type: WorkoutType::Easy,
                    distance_km: Some(distance),
                    duration_min: None,
                    pace: Some(format_pace(self.zones.easy)),
                    description: "Easy aerobic run.".to_string(),
                    notes: Some("Conversation pace. Should feel comfortable.".to_string()),
                }
            });
            used.push(date);
        }
    }

    fn race_day(&self, date: Date) -> TrainingWorkout {
        TrainingWorkout {
            day: weekday_name(date.weekday()).to_string(),
            date,
            workout_type: WorkoutType::Race,
            distance_km: Some(self.race_distance_km),
            duration_min: None,
            pace: Some(format_pace(self.zones.race)),
            description: "RACE DAY!".to_string(),
            notes: Some(
                "Trust your training. Start conservatively, finish strong. Stick to your goal pace."
                    .to_string(),
            ),
        }
    }
}

/// The seven consecutive dates of a week.
fn week_dates(start_date: Date) -> Result<Vec<Date>> {
    (0..7i64)
        .map(|offset| Ok(start_date.checked_add(offset.days())?))
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    // Monday
    const START: Date = date(2026, 11, 2);

    fn scheduler(race_km: f64, days: u8, long_run_day: LongRunDay) -> WorkoutScheduler {
        WorkoutScheduler::new(race_km, days, long_run_day, PaceZones::from_goal_pace(300.0), 2)
    }

    fn targets(week_number: u32, phase: Phase, mileage_km: f64, long_run_km: f64) -> WeekTargets {
        WeekTargets {
            week_number,
            phase,
            is_recovery_week: false,
            mileage_km,
            long_run_km,
        }
    }

    fn types(workouts: &[TrainingWorkout]) -> Vec<WorkoutType> {
        workouts.iter().map(|w| w.workout_type).collect()
    }

    #[test]
    fn test_base_week_with_strides() {
        let workouts = scheduler(5.0, 4, LongRunDay::Sunday)
            .schedule(&targets(1, Phase::Base, 20.0, 5.0), START, None)
            .expect("schedule");

        assert_eq!(workouts.len(), 4);
        assert_eq!(
            types(&workouts),
            vec![
                WorkoutType::Recovery, // Mon follows a Sunday long run
                WorkoutType::Easy,
                WorkoutType::Strides,
                WorkoutType::Long,
            ]
        );

        let strides = &workouts[2];
        assert_eq!(strides.day, "Wednesday");
        assert_eq!(strides.date, date(2026, 11, 4));
        assert_eq!(strides.distance_km, Some(5.0));

        let long = &workouts[3];
        assert_eq!(long.day, "Sunday");
        assert_eq!(long.date, date(2026, 11, 8));
        assert_eq!(long.pace.as_deref(), Some("6:15/km"));

        // (20 - 5 - 5) / 2 remaining sessions
        assert_eq!(workouts[0].distance_km, Some(5.0));
        assert_eq!(workouts[1].distance_km, Some(5.0));
    }

    #[test]
    fn test_strides_need_four_days() {
        let workouts = scheduler(5.0, 3, LongRunDay::Saturday)
            .schedule(&targets(1, Phase::Base, 18.0, 6.0), START, None)
            .expect("schedule");

        assert!(!types(&workouts).contains(&WorkoutType::Strides));
        assert_eq!(workouts.len(), 3);
    }

    #[test]
    fn test_saturday_long_run_moves_strides_to_tuesday() {
        let workouts = scheduler(5.0, 5, LongRunDay::Saturday)
            .schedule(&targets(1, Phase::Base, 25.0, 5.0), START, None)
            .expect("schedule");

        let strides = workouts
            .iter()
            .find(|w| w.workout_type == WorkoutType::Strides)
            .expect("strides session");
        assert_eq!(strides.day, "Tuesday");

        let long = workouts
            .iter()
            .find(|w| w.workout_type == WorkoutType::Long)
            .expect("long run");
        assert_eq!(long.day, "Saturday");
    }

    #[test]
    fn test_build_tempo_ramps_and_caps() {
        let s = scheduler(10.0, 5, LongRunDay::Sunday);

        let first = s
            .schedule(&targets(3, Phase::Build, 30.0, 8.0), START, None)
            .expect("schedule");
        let tempo = first
            .iter()
            .find(|w| w.workout_type == WorkoutType::Tempo)
            .expect("tempo");
        assert_eq!(tempo.day, "Wednesday");
        assert_eq!(tempo.duration_min, Some(17));
        assert_eq!(tempo.distance_km, None);
        assert_eq!(tempo.pace.as_deref(), Some("4:45/km"));

        let late = s
            .schedule(&targets(20, Phase::Build, 30.0, 8.0), START, None)
            .expect("schedule");
        let tempo = late
            .iter()
            .find(|w| w.workout_type == WorkoutType::Tempo)
            .expect("tempo");
        assert_eq!(tempo.duration_min, Some(30));
    }

    #[test]
    fn test_day_after_quality_session_is_recovery() {
        let workouts = scheduler(10.0, 6, LongRunDay::Saturday)
            .schedule(&targets(3, Phase::Build, 40.0, 10.0), START, None)
            .expect("schedule");

        assert_eq!(
            types(&workouts),
            vec![
                WorkoutType::Easy,
                WorkoutType::Easy,
                WorkoutType::Tempo,
                WorkoutType::Recovery,
                WorkoutType::Easy,
                WorkoutType::Long,
            ]
        );
        assert_eq!(workouts[3].day, "Thursday");
        assert_eq!(workouts[3].distance_km, Some(7.5));
    }

    #[test]
    fn test_day_after_strides_is_recovery() {
        let workouts = scheduler(5.0, 5, LongRunDay::Sunday)
            .schedule(&targets(1, Phase::Base, 25.0, 5.0), START, None)
            .expect("schedule");

        assert_eq!(
            types(&workouts),
            vec![
                WorkoutType::Recovery,
                WorkoutType::Easy,
                WorkoutType::Strides,
                WorkoutType::Recovery,
                WorkoutType::Long,
            ]
        );
    }

    #[test]
    fn test_sunday_after_saturday_long_run_is_recovery() {
        // Week Sunday 1 Nov .. Saturday 7 Nov
        let start = date(2026, 11, 1);
        let workouts = scheduler(10.0, 6, LongRunDay::Saturday)
            .schedule(&targets(3, Phase::Build, 40.0, 10.0), start, None)
            .expect("schedule");

        assert_eq!(workouts[0].day, "Sunday");
        assert_eq!(
            types(&workouts),
            vec![
                WorkoutType::Recovery,
                WorkoutType::Easy,
                WorkoutType::Easy,
                WorkoutType::Tempo,
                WorkoutType::Recovery,
                WorkoutType::Long,
            ]
        );
    }

    #[test]
    fn test_sharpening_alternates_sessions() {
        let s = scheduler(10.0, 5, LongRunDay::Sunday);

        let odd = s
            .schedule(&targets(7, Phase::Sharpening, 40.0, 10.0), START, None)
            .expect("schedule");
        let interval = odd
            .iter()
            .find(|w| w.workout_type == WorkoutType::Interval)
            .expect("interval");
        assert!(interval.description.contains("5x 1km"));
        assert_eq!(interval.pace.as_deref(), Some("4:25/km"));

        let even = s
            .schedule(&targets(6, Phase::Sharpening, 40.0, 10.0), START, None)
            .expect("schedule");
        let race_pace = even
            .iter()
            .find(|w| w.workout_type == WorkoutType::RacePace)
            .expect("race pace");
        assert!(race_pace.description.contains("2x 2km at goal pace"));
        assert_eq!(race_pace.pace.as_deref(), Some("5:00/km"));
    }

    #[test]
    fn test_fast_finish_long_run_states_split_and_paces() {
        let workouts = scheduler(21.0975, 5, LongRunDay::Sunday)
            .schedule(&targets(8, Phase::Sharpening, 45.0, 16.0), START, None)
            .expect("schedule");

        let long = workouts
            .iter()
            .find(|w| w.workout_type == WorkoutType::Long)
            .expect("long run");
        assert!(long.description.contains("first 12.0km at 6:15/km"));
        assert!(long.description.contains("last 4.0km at goal pace 5:00/km"));
        assert_eq!(long.pace.as_deref(), Some("6:15/km → 5:00/km"));
    }

    #[test]
    fn test_recovery_week_has_plain_long_run() {
        let mut week = targets(8, Phase::Sharpening, 30.0, 10.0);
        week.is_recovery_week = true;

        let workouts = scheduler(21.0975, 5, LongRunDay::Sunday)
            .schedule(&week, START, None)
            .expect("schedule");
        let long = workouts
            .iter()
            .find(|w| w.workout_type == WorkoutType::Long)
            .expect("long run");
        assert!(!long.description.contains("fast finish"));
    }

    #[test]
    fn test_race_week_reserves_race_day() {
        // Week Monday 2 Nov .. Sunday 8 Nov, race on the Sunday
        let race = date(2026, 11, 8);
        let workouts = scheduler(10.0, 5, LongRunDay::Sunday)
            .schedule(&targets(10, Phase::Taper, 12.0, 3.0), START, Some(race))
            .expect("schedule");

        let races: Vec<_> = workouts
            .iter()
            .filter(|w| w.workout_type == WorkoutType::Race)
            .collect();
        assert_eq!(races.len(), 1);
        assert_eq!(races[0].date, race);
        assert_eq!(races[0].distance_km, Some(10.0));
        assert_eq!(races[0].pace.as_deref(), Some("5:00/km"));

        // The Sunday long run gives way to the race.
        assert!(workouts
            .iter()
            .all(|w| w.workout_type != WorkoutType::Long));
        assert_eq!(workouts.iter().filter(|w| w.date == race).count(), 1);
    }

    #[test]
    fn test_workouts_sorted_and_within_week() {
        let workouts = scheduler(42.195, 6, LongRunDay::Saturday)
            .schedule(&targets(5, Phase::Build, 50.0, 18.0), START, None)
            .expect("schedule");

        assert_eq!(workouts.len(), 6);
        assert!(workouts.windows(2).all(|pair| pair[0].date < pair[1].date));
        let end = date(2026, 11, 8);
        assert!(workouts.iter().all(|w| START <= w.date && w.date <= end));
    }

    #[test]
    fn test_no_fill_when_volume_is_used_up() {
        let workouts = scheduler(5.0, 5, LongRunDay::Sunday)
            .schedule(&targets(8, Phase::Taper, 3.0, 3.0), START, None)
            .expect("schedule");

        assert_eq!(types(&workouts), vec![WorkoutType::Long]);
    }
}
