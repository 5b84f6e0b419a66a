//! Reduction of run history into a [`RunningAnalysis`].
//!
//! Every statistic is computed over *valid* runs only (positive distance and
//! duration), so pace arithmetic never divides by zero. Windows are measured
//! back from a caller-supplied reference date, which keeps the analysis
//! reproducible in tests.

use std::collections::BTreeMap;

use jiff::{civil::Date, ToSpan};
use log::debug;

use crate::models::{BestEffort, Confidence, FitnessTrend, RunRecord, RunningAnalysis};

/// Length of the "recent" window in months.
pub const RECENT_WINDOW_MONTHS: i64 = 3;

/// Length of the weekly-volume window in days.
pub const VOLUME_WINDOW_DAYS: i64 = 56;

/// Relative pace change needed before a trend is reported.
const TREND_THRESHOLD: f64 = 0.03;

/// Multiplier applied to the best pace for the goal pace display hint.
const SUGGESTED_GOAL_FACTOR: f64 = 0.96;

const LOW_CONFIDENCE_REASONING: &str =
    "Limited running history. Goal pace is an estimate based on available data.";
const MEDIUM_CONFIDENCE_REASONING: &str = "Moderate running history. Goal pace is based on your \
     best recent performances with room for improvement.";
const HIGH_CONFIDENCE_REASONING: &str = "Strong running history. Goal pace is based on your \
     performance trends and accounts for potential improvement.";

/// A valid run reduced to the values the analysis works with.
#[derive(Debug, Clone, Copy)]
struct PacedRun {
    pace: f64,
    distance_km: f64,
    date: Date,
}

impl From<&RunRecord> for PacedRun {
    fn from(run: &RunRecord) -> Self {
        Self {
            pace: run.pace_seconds_per_km(),
            distance_km: run.distance_km(),
            date: run.date,
        }
    }
}

/// Analyzes run history as of `today`.
///
/// Runs are expected newest first, the order the activity store returns
/// them in; only the fitness trend depends on that order.
///
/// # Examples
///
/// ```rust
/// use stride_core::{analyze_running_data, models::{Confidence, FitnessTrend}};
/// use jiff::civil::date;
///
/// let analysis = analyze_running_data(&[], date(2026, 10, 18));
/// assert_eq!(analysis.total_runs, 0);
/// assert_eq!(analysis.confidence, Confidence::Low);
/// assert_eq!(analysis.fitness_trend, FitnessTrend::Stable);
/// ```
pub fn analyze_running_data(runs: &[RunRecord], today: Date) -> RunningAnalysis {
    let valid: Vec<PacedRun> = runs
        .iter()
        .filter(|run| run.is_valid())
        .map(PacedRun::from)
        .collect();

    if valid.len() < runs.len() {
        debug!(
            "Discarded {} runs with non-positive distance or duration",
            runs.len() - valid.len()
        );
    }

    if valid.is_empty() {
        return RunningAnalysis::empty();
    }

    let average_pace = mean_pace(&valid);
    let best_pace = valid.iter().map(|r| r.pace).fold(f64::INFINITY, f64::min);
    let longest_run_km = valid.iter().map(|r| r.distance_km).fold(0.0, f64::max);

    let recent_cutoff = today.saturating_sub(RECENT_WINDOW_MONTHS.months());
    let recent: Vec<PacedRun> = valid
        .iter()
        .filter(|r| r.date >= recent_cutoff)
        .copied()
        .collect();
    let recent_average_pace = if recent.is_empty() {
        average_pace
    } else {
        mean_pace(&recent)
    };

    let volume_cutoff = today.saturating_sub(VOLUME_WINDOW_DAYS.days());
    let volume_km: f64 = valid
        .iter()
        .filter(|r| r.date >= volume_cutoff)
        .map(|r| r.distance_km)
        .sum();
    let weekly_volume_km = volume_km / (VOLUME_WINDOW_DAYS / 7) as f64;

    let total_runs = u32::try_from(valid.len()).unwrap_or(u32::MAX);
    let (confidence, reasoning) = confidence_for(total_runs);

    RunningAnalysis {
        average_pace,
        best_pace,
        recent_average_pace,
        total_runs,
        weekly_volume_km,
        longest_run_km,
        suggested_goal_pace: best_pace * SUGGESTED_GOAL_FACTOR,
        confidence,
        reasoning: reasoning.to_string(),
        recent_best_efforts: best_efforts(&recent),
        fitness_trend: fitness_trend(&recent),
    }
}

fn mean_pace(runs: &[PacedRun]) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(|r| r.pace).sum::<f64>() / runs.len() as f64
}

/// Keeps the fastest run per whole-kilometer bucket.
fn best_efforts(recent: &[PacedRun]) -> Vec<BestEffort> {
    let mut buckets: BTreeMap<u32, BestEffort> = BTreeMap::new();

    for run in recent {
        let distance_km = run.distance_km.round() as u32;
        // Sub-500 m runs would give a zero-length effort.
        if distance_km == 0 {
            continue;
        }
        let candidate = BestEffort {
            distance_km,
            pace: run.pace,
            date: run.date,
        };
        buckets
            .entry(distance_km)
            .and_modify(|best| {
                if candidate.pace < best.pace {
                    *best = candidate;
                }
            })
            .or_insert(candidate);
    }

    buckets.into_values().collect()
}

/// Compares the first half of the supplied order against the second half.
///
/// NOTE: with newest-first input a positive `improvement` means the newer
/// half was *slower*, yet it is labelled improving. Kept as-is until the
/// intended direction is confirmed.
fn fitness_trend(recent: &[PacedRun]) -> FitnessTrend {
    let mid = recent.len() / 2;
    let first_half = mean_pace(&recent[..mid]);
    let second_half = mean_pace(&recent[mid..]);

    if first_half <= 0.0 || second_half <= 0.0 {
        return FitnessTrend::Stable;
    }

    let improvement = (first_half - second_half) / first_half;
    if improvement > TREND_THRESHOLD {
        FitnessTrend::Improving
    } else if improvement < -TREND_THRESHOLD {
        FitnessTrend::Declining
    } else {
        FitnessTrend::Stable
    }
}

fn confidence_for(valid_runs: u32) -> (Confidence, &'static str) {
    match valid_runs {
        0..=4 => (Confidence::Low, LOW_CONFIDENCE_REASONING),
        5..=19 => (Confidence::Medium, MEDIUM_CONFIDENCE_REASONING),
        _ => (Confidence::High, HIGH_CONFIDENCE_REASONING),
    }
}
