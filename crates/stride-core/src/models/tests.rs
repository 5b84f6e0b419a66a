//! Tests for the data models.

use std::str::FromStr;

use jiff::civil::date;

use super::*;

fn workout(day: i8, workout_type: WorkoutType, distance_km: Option<f64>) -> TrainingWorkout {
    let date = date(2026, 11, day);
    TrainingWorkout {
        day: crate::display::weekday_name(date.weekday()).to_string(),
        date,
        workout_type,
        distance_km,
        duration_min: None,
        pace: Some("5:00/km".to_string()),
        description: "Test workout".to_string(),
        notes: None,
    }
}

fn week() -> TrainingWeek {
    TrainingWeek {
        week_number: 1,
        start_date: date(2026, 11, 2),
        end_date: date(2026, 11, 8),
        total_distance_km: 20.0,
        phase: Phase::Base,
        workouts: vec![
            workout(2, WorkoutType::Recovery, Some(5.0)),
            workout(4, WorkoutType::Tempo, None),
            workout(8, WorkoutType::Long, Some(7.5)),
        ],
    }
}

#[test]
fn test_run_record_validity() {
    let day = date(2026, 10, 1);
    assert!(RunRecord::new(day, 5000.0, 1500.0).is_valid());
    assert!(!RunRecord::new(day, 0.0, 1500.0).is_valid());
    assert!(!RunRecord::new(day, 5000.0, -1.0).is_valid());

    let run = RunRecord::new(day, 8000.0, 2400.0);
    assert_eq!(run.distance_km(), 8.0);
    assert_eq!(run.pace_seconds_per_km(), 300.0);
}

#[test]
fn test_enum_parsing() {
    assert_eq!(Experience::from_str("ADVANCED"), Ok(Experience::Advanced));
    assert!(Experience::from_str("elite").is_err());

    assert_eq!(LongRunDay::from_str("sat"), Ok(LongRunDay::Saturday));
    assert!(LongRunDay::from_str("friday").is_err());

    assert_eq!(WorkoutType::from_str("race-pace"), Ok(WorkoutType::RacePace));
    assert_eq!(WorkoutType::from_str("race_pace"), Ok(WorkoutType::RacePace));
    assert_eq!(Phase::from_str("Sharpening"), Ok(Phase::Sharpening));
    assert_eq!(Confidence::from_str("high"), Ok(Confidence::High));
    assert_eq!(FitnessTrend::from_str("declining"), Ok(FitnessTrend::Declining));
}

#[test]
fn test_hard_workouts() {
    assert!(WorkoutType::Tempo.is_hard());
    assert!(WorkoutType::RacePace.is_hard());
    assert!(!WorkoutType::Long.is_hard());
    assert!(!WorkoutType::Recovery.is_hard());
}

#[test]
fn test_long_run_day_weekdays() {
    use jiff::civil::Weekday;

    assert_eq!(LongRunDay::Sunday.weekday(), Weekday::Sunday);
    assert_eq!(LongRunDay::Sunday.strides_weekday(), Weekday::Wednesday);
    assert_eq!(LongRunDay::Saturday.strides_weekday(), Weekday::Tuesday);
}

#[test]
fn test_days_per_week_defaults_and_cap() {
    let mut inputs = RaceInputs::new(10_000.0, date(2027, 3, 14));
    assert_eq!(inputs.days_per_week(), 5);

    inputs.training_experience = Experience::Beginner;
    assert_eq!(inputs.days_per_week(), 4);

    inputs.available_days_per_week = Some(7);
    assert_eq!(inputs.days_per_week(), MAX_DAYS_PER_WEEK);

    inputs.available_days_per_week = Some(0);
    assert_eq!(inputs.days_per_week(), 1);
}

#[test]
fn test_race_inputs_deserialize_with_defaults() {
    let inputs: RaceInputs = serde_json::from_str(
        r#"{"race_distance_meters": 21097.5, "race_date": "2027-04-04"}"#,
    )
    .expect("valid inputs");

    assert_eq!(inputs.race_date, date(2027, 4, 4));
    assert_eq!(inputs.training_experience, Experience::Intermediate);
    assert_eq!(inputs.preferred_long_run_day, LongRunDay::Sunday);
    assert_eq!(inputs.goal_pace_seconds_per_km, None);
}

#[test]
fn test_workout_serializes_wire_shape() {
    let json = serde_json::to_value(workout(4, WorkoutType::RacePace, Some(8.0)))
        .expect("serializable");

    assert_eq!(json["type"], "race-pace");
    assert_eq!(json["date"], "2026-11-04");
    assert_eq!(json["day"], "Wednesday");
    assert_eq!(json["distance_km"], 8.0);
    assert!(json.get("duration_min").is_none());
    assert!(json.get("notes").is_none());
}

#[test]
fn test_week_serializes_phase_lowercase() {
    let json = serde_json::to_value(week()).expect("serializable");
    assert_eq!(json["phase"], "base");
    assert_eq!(json["start_date"], "2026-11-02");
    assert_eq!(json["workouts"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_week_helpers() {
    let week = week();

    assert!(week.contains(date(2026, 11, 2)));
    assert!(week.contains(date(2026, 11, 8)));
    assert!(!week.contains(date(2026, 11, 9)));
    assert_eq!(week.scheduled_distance_km(), 12.5);
    assert_eq!(week.workouts_of(WorkoutType::Long).count(), 1);
    assert_eq!(week.workouts_of(WorkoutType::Race).count(), 0);
}

#[test]
fn test_empty_analysis() {
    let analysis = RunningAnalysis::empty();
    assert_eq!(analysis.total_runs, 0);
    assert_eq!(analysis.confidence, Confidence::Low);
    assert_eq!(analysis.fitness_trend, FitnessTrend::Stable);
    assert_eq!(analysis.reasoning, "No running data available");
}
