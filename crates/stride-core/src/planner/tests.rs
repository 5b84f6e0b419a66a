//! Tests for the planner module.

use std::sync::Arc;

use jiff::{civil::date, ToSpan};
use tempfile::TempDir;

use super::*;
use crate::{
    error::{PlannerError, Result},
    models::{Confidence, RaceInputs, RunRecord, RunningAnalysis, TrainingWeek, WorkoutType},
    params::{EstimatePace, GeneratePlan},
};

const TODAY: Date = date(2026, 10, 18);

/// Helper function to create a test planner over the given runs
fn create_test_planner(runs: &[RunRecord]) -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let runs_path = temp_dir.path().join("runs.json");
    std::fs::write(
        &runs_path,
        serde_json::to_string(runs).expect("Failed to serialize runs"),
    )
    .expect("Failed to write runs");

    let planner = PlannerBuilder::new()
        .with_runs_path(Some(&runs_path))
        .with_today(Some(TODAY))
        .build()
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Twelve runs of 10 km at 5:00/km over the last six weeks.
fn steady_runs() -> Vec<RunRecord> {
    (0..12)
        .map(|i| {
            RunRecord::new(
                TODAY.checked_sub((i * 3).days()).expect("date"),
                10_000.0,
                3000.0,
            )
        })
        .collect()
}

#[test]
fn test_pinned_today() {
    let (_temp_dir, planner) = create_test_planner(&[]);
    assert_eq!(planner.today(), TODAY);
}

#[tokio::test]
async fn test_missing_history_is_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = PlannerBuilder::new()
        .with_runs_path(Some(temp_dir.path().join("absent.json")))
        .with_today(Some(TODAY))
        .build()
        .expect("Failed to create planner");

    let runs = planner.load_runs().await.expect("Failed to load runs");
    assert!(runs.is_empty());

    let analysis = planner.analyze().await.expect("Failed to analyze");
    assert_eq!(analysis, RunningAnalysis::empty());
}

#[tokio::test]
async fn test_malformed_history_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let runs_path = temp_dir.path().join("runs.json");
    std::fs::write(&runs_path, "{ not json").expect("Failed to write runs");

    let planner = PlannerBuilder::new()
        .with_runs_path(Some(&runs_path))
        .build()
        .expect("Failed to create planner");

    let err = planner.load_runs().await.expect_err("malformed history");
    assert!(matches!(err, PlannerError::Serialization { .. }));
}

#[tokio::test]
async fn test_analyze_loaded_history() {
    let (_temp_dir, planner) = create_test_planner(&steady_runs());

    let analysis = planner.analyze().await.expect("Failed to analyze");
    assert_eq!(analysis.total_runs, 12);
    assert_eq!(analysis.confidence, Confidence::Medium);
    assert!((analysis.best_pace - 300.0).abs() < 1e-9);
    assert!((analysis.weekly_volume_km - 15.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_estimate_goal_pace() {
    let (_temp_dir, planner) = create_test_planner(&steady_runs());

    let estimate = planner
        .estimate_goal_pace(&EstimatePace {
            race_distance_meters: 10_000.0,
        })
        .await
        .expect("Failed to estimate");

    assert!((estimate.goal_pace_seconds_per_km - 291.0).abs() < 1e-9);
    assert!((estimate.predicted_time_seconds - 2910.0).abs() < 1e-6);
    assert_eq!(estimate.based_on_runs, 12);
}

#[tokio::test]
async fn test_estimate_without_history_uses_default() {
    let (_temp_dir, planner) = create_test_planner(&[]);

    let estimate = planner
        .estimate_goal_pace(&EstimatePace {
            race_distance_meters: 5000.0,
        })
        .await
        .expect("Failed to estimate");
    assert_eq!(estimate.goal_pace_seconds_per_km, 360.0);
    assert_eq!(estimate.confidence, Confidence::Low);
}

#[tokio::test]
async fn test_generate_plan_envelope() {
    let (_temp_dir, planner) = create_test_planner(&steady_runs());

    let plan = planner
        .generate_plan(&GeneratePlan::new(10_000.0, "2027-01-31"))
        .await
        .expect("Failed to generate plan");

    assert_eq!(plan.strategy, RuleBasedStrategy::NAME);
    assert_eq!(plan.structure.total_weeks() as usize, plan.weeks.len());
    assert!((plan.goal_pace_seconds_per_km - 291.0).abs() < 1e-9);
    assert_eq!(plan.analysis.total_runs, 12);
    assert_eq!(validate_plan(&plan.weeks, &plan.inputs), Ok(()));
}

#[tokio::test]
async fn test_generate_plan_rejects_invalid_request() {
    let (_temp_dir, planner) = create_test_planner(&[]);

    let err = planner
        .generate_plan(&GeneratePlan::new(10_000.0, "next spring"))
        .await
        .expect_err("invalid date");
    assert!(matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "race_date"));
    assert!(err.is_rejection());
}

#[tokio::test]
async fn test_generate_plan_lead_time() {
    let (_temp_dir, planner) = create_test_planner(&[]);

    let err = planner
        .generate_plan(&GeneratePlan::new(42_195.0, "2026-11-27"))
        .await
        .expect_err("too close");
    assert!(matches!(err, PlannerError::InsufficientLeadTime { .. }));
    assert!(err.is_rejection());
}

struct Unavailable;

impl PlanStrategy for Unavailable {
    fn name(&self) -> &str {
        "remote"
    }

    fn generate(
        &self,
        _inputs: &RaceInputs,
        _analysis: &RunningAnalysis,
        _runs: &[RunRecord],
    ) -> Result<Vec<TrainingWeek>> {
        Err(PlannerError::strategy("remote").with_message("timed out"))
    }
}

#[tokio::test]
async fn test_alternate_strategy_falls_back() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = PlannerBuilder::new()
        .with_runs_path(Some(temp_dir.path().join("runs.json")))
        .with_today(Some(TODAY))
        .with_strategy(Arc::new(Unavailable))
        .build()
        .expect("Failed to create planner");

    let plan = planner
        .generate_plan(&GeneratePlan::new(5000.0, "2026-12-27"))
        .await
        .expect("Failed to generate plan");

    assert_eq!(plan.strategy, RuleBasedStrategy::NAME);
    let last = plan.weeks.last().expect("weeks");
    assert_eq!(last.workouts_of(WorkoutType::Race).count(), 1);
}

#[tokio::test]
async fn test_lead_time_checked_before_alternate_strategy() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = PlannerBuilder::new()
        .with_runs_path(Some(temp_dir.path().join("runs.json")))
        .with_today(Some(TODAY))
        .with_strategy(Arc::new(RuleBasedStrategy::new(date(2020, 1, 1))))
        .build()
        .expect("Failed to create planner");

    let err = planner
        .generate_plan(&GeneratePlan::new(5000.0, "2026-11-01"))
        .await
        .expect_err("too close");
    assert!(matches!(err, PlannerError::InsufficientLeadTime { .. }));
}
