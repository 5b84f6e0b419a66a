//! Integration tests comparing CLI output with the core Display
//! implementations
//!
//! The CLI renders the same markdown the MCP tools return, so with plain
//! output and a pinned date both must match byte for byte.

use std::{path::Path, process::Command};

use jiff::civil::date;
use stride_core::{
    params::{EstimatePace, GeneratePlan},
    Planner, PlannerBuilder, TrainingPlan,
};
use tempfile::TempDir;

const TODAY: &str = "2026-10-18";

/// Helper function to create a test planner over a temporary history file
fn create_test_planner(temp_dir: &TempDir) -> Planner {
    std::fs::write(
        temp_dir.path().join("runs.json"),
        r#"[
            {"date": "2026-10-17", "distance_meters": 5000.0, "duration_seconds": 1450.0},
            {"date": "2026-10-12", "distance_meters": 12000.0, "duration_seconds": 4080.0},
            {"date": "2026-10-08", "distance_meters": 8000.0, "duration_seconds": 2560.0},
            {"date": "2026-09-27", "distance_meters": 16000.0, "duration_seconds": 5600.0},
            {"date": "2026-09-20", "distance_meters": 10000.0, "duration_seconds": 3100.0}
        ]"#,
    )
    .expect("Failed to write runs");

    PlannerBuilder::new()
        .with_runs_path(Some(temp_dir.path().join("runs.json")))
        .with_today(Some(date(2026, 10, 18)))
        .build()
        .expect("Failed to create planner")
}

/// Run a CLI command and capture its output
fn run_cli_command(runs_file: &Path, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stride"));
    cmd.arg("--no-color")
        .arg("--today")
        .arg(TODAY)
        .arg("--runs-file")
        .arg(runs_file);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_analysis_display_consistency() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let planner = create_test_planner(&temp_dir);

    let cli_output = run_cli_command(planner.runs_path(), &["analyze"]);
    let analysis = planner.analyze().await.expect("Failed to analyze");

    assert_eq!(cli_output, analysis.to_string());
    assert!(cli_output.contains("- Runs analyzed: 5"));
}

#[tokio::test]
async fn test_pace_display_consistency() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let planner = create_test_planner(&temp_dir);

    let cli_output = run_cli_command(planner.runs_path(), &["pace", "21097.5"]);
    let estimate = planner
        .estimate_goal_pace(&EstimatePace {
            race_distance_meters: 21_097.5,
        })
        .await
        .expect("Failed to estimate");

    assert_eq!(cli_output, estimate.to_string());
}

#[tokio::test]
async fn test_plan_display_consistency() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let planner = create_test_planner(&temp_dir);

    let cli_output = run_cli_command(
        planner.runs_path(),
        &[
            "plan",
            "--distance",
            "10000",
            "--date",
            "2027-01-31",
            "--goal-time",
            "2880",
            "--days",
            "4",
            "--injuries",
            "Achilles tendinopathy in 2025",
        ],
    );

    let mut params = GeneratePlan::new(10_000.0, "2027-01-31");
    params.goal_time_seconds = Some(2880.0);
    params.available_days_per_week = Some(4);
    params.injury_history = Some("Achilles tendinopathy in 2025".to_string());
    let plan = planner
        .generate_plan(&params)
        .await
        .expect("Failed to generate plan");

    assert_eq!(cli_output, TrainingPlan(&plan).to_string());
    assert!(cli_output.contains("- Goal pace: 4:48/km"));
    assert!(cli_output.contains("- Injury history: Achilles tendinopathy in 2025"));
}

#[tokio::test]
async fn test_plan_json_matches_core_serialization() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let planner = create_test_planner(&temp_dir);

    let cli_output = run_cli_command(
        planner.runs_path(),
        &["plan", "--distance", "5000", "--date", "2026-12-27", "--json"],
    );
    let plan = planner
        .generate_plan(&GeneratePlan::new(5000.0, "2026-12-27"))
        .await
        .expect("Failed to generate plan");

    let cli_json: serde_json::Value = serde_json::from_str(&cli_output).expect("CLI JSON");
    let core_json = serde_json::to_value(&plan).expect("core JSON");
    assert_eq!(cli_json, core_json);
}
