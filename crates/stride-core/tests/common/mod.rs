use jiff::civil::{date, Date};
use stride_core::{PlannerBuilder, RunRecord};
use tempfile::TempDir;

/// Reference date used by every integration test.
pub const TODAY: Date = date(2026, 10, 18);

/// Helper function to create a test planner over the given run history
pub fn create_test_planner(runs: &[RunRecord]) -> (TempDir, stride_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let runs_path = temp_dir.path().join("runs.json");
    std::fs::write(
        &runs_path,
        serde_json::to_string_pretty(runs).expect("Failed to serialize runs"),
    )
    .expect("Failed to write runs");

    let planner = PlannerBuilder::new()
        .with_runs_path(Some(&runs_path))
        .with_today(Some(TODAY))
        .build()
        .expect("Failed to create planner");
    (temp_dir, planner)
}
