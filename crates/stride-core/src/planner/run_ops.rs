//! Run history operations for the Planner.

use std::{fs, io::ErrorKind, path::Path};

use jiff::{civil::Date, ToSpan};
use log::{debug, info};
use tokio::task;

use super::{assembler::DEFAULT_GOAL_PACE, Planner};
use crate::{
    analyzer::analyze_running_data,
    error::{FileSystemResultExt, PlannerError, Result},
    goal_pace::estimate_goal_pace,
    models::{GoalPaceEstimate, RunRecord, RunningAnalysis},
    operations::validate_estimate,
    params::EstimatePace,
};

/// How far back run history is considered.
pub const HISTORY_WINDOW_MONTHS: i64 = 12;

impl Planner {
    /// Loads the runs of the last twelve months, newest first.
    ///
    /// A missing history file is an empty history.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the file cannot be read and
    /// `PlannerError::Serialization` if it is not a JSON array of runs.
    pub async fn load_runs(&self) -> Result<Vec<RunRecord>> {
        let path = self.runs_path.clone();
        let today = self.today();

        let runs = task::spawn_blocking(move || read_runs(&path))
            .await
            .map_err(|e| PlannerError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(within_history_window(runs, today))
    }

    /// Analyzes the loaded run history.
    pub async fn analyze(&self) -> Result<RunningAnalysis> {
        let runs = self.load_runs().await?;
        Ok(analyze_running_data(&runs, self.today()))
    }

    /// Estimates a goal pace for a race distance from the run history.
    ///
    /// Falls back to 6:00/km when the history gives nothing to go on.
    pub async fn estimate_goal_pace(&self, params: &EstimatePace) -> Result<GoalPaceEstimate> {
        let race_distance_km = validate_estimate(params)? / 1000.0;
        let analysis = self.analyze().await?;

        let estimate = estimate_goal_pace(race_distance_km, &analysis);
        let goal_pace = if estimate.is_finite() && estimate > 0.0 {
            estimate
        } else {
            DEFAULT_GOAL_PACE
        };

        Ok(GoalPaceEstimate {
            race_distance_km,
            goal_pace_seconds_per_km: goal_pace,
            predicted_time_seconds: goal_pace * race_distance_km,
            confidence: analysis.confidence,
            based_on_runs: analysis.total_runs,
        })
    }
}

fn read_runs(path: &Path) -> Result<Vec<RunRecord>> {
    let contents = match fs::read_to_string(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No run history at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        result => result.fs_context(path)?,
    };

    let runs: Vec<RunRecord> = serde_json::from_str(&contents)?;
    info!("Loaded {} runs from {}", runs.len(), path.display());
    Ok(runs)
}

/// Keeps runs between twelve months ago and `today`, newest first.
fn within_history_window(mut runs: Vec<RunRecord>, today: Date) -> Vec<RunRecord> {
    let cutoff = today.saturating_sub(HISTORY_WINDOW_MONTHS.months());
    let loaded = runs.len();

    runs.retain(|run| cutoff <= run.date && run.date <= today);
    runs.sort_by(|a, b| b.date.cmp(&a.date));

    if runs.len() < loaded {
        debug!("Ignored {} runs outside {cutoff}..{today}", loaded - runs.len());
    }
    runs
}
