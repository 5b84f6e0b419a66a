//! Race pace extrapolation from recent best efforts.
//!
//! Uses Riegel's power law, `T2 = T1 × (D2 / D1)^1.06`, to carry a known
//! performance over to the race distance.

use std::cmp::Ordering;

use crate::models::{BestEffort, RunningAnalysis};

/// Riegel exponent for running.
pub const RIEGEL_EXPONENT: f64 = 1.06;

/// Margin applied to the best pace when there are no recent efforts.
const FALLBACK_MARGIN: f64 = 0.95;

/// Margin applied to an effort at roughly the race distance.
const DIRECT_MARGIN: f64 = 0.97;

/// Margin applied to a Riegel extrapolation.
const EXTRAPOLATED_MARGIN: f64 = 0.96;

/// Relative distance difference under which an effort transfers directly.
const DIRECT_TRANSFER_TOLERANCE: f64 = 0.2;

/// Predicts the time over `distance2` from a time `time1` over `distance1`.
///
/// Distances may be in any unit as long as both use the same one.
///
/// ```rust
/// use stride_core::goal_pace::riegel_formula;
///
/// let predicted = riegel_formula(1500.0, 5.0, 10.0);
/// assert!((predicted - 3127.4).abs() < 0.1);
/// ```
pub fn riegel_formula(time1: f64, distance1: f64, distance2: f64) -> f64 {
    time1 * (distance2 / distance1).powf(RIEGEL_EXPONENT)
}

/// Estimates a realistic goal pace (seconds per km) for a race of
/// `race_distance_km`.
pub fn estimate_goal_pace(race_distance_km: f64, analysis: &RunningAnalysis) -> f64 {
    let Some(closest) = closest_effort(&analysis.recent_best_efforts, race_distance_km) else {
        return analysis.best_pace * FALLBACK_MARGIN;
    };

    let effort_km = f64::from(closest.distance_km);
    if (effort_km - race_distance_km).abs() / race_distance_km < DIRECT_TRANSFER_TOLERANCE {
        return closest.pace * DIRECT_MARGIN;
    }

    let effort_time = closest.pace * effort_km;
    let race_time = riegel_formula(effort_time, effort_km, race_distance_km);
    (race_time / race_distance_km) * EXTRAPOLATED_MARGIN
}

/// Effort whose distance is nearest the race distance. Candidates are
/// considered fastest first and the first of equally close efforts wins.
fn closest_effort(efforts: &[BestEffort], race_distance_km: f64) -> Option<BestEffort> {
    let mut by_pace = efforts.to_vec();
    by_pace.sort_by(|a, b| a.pace.partial_cmp(&b.pace).unwrap_or(Ordering::Equal));

    by_pace.into_iter().reduce(|closest, current| {
        let closest_diff = (f64::from(closest.distance_km) - race_distance_km).abs();
        let current_diff = (f64::from(current.distance_km) - race_distance_km).abs();
        if current_diff < closest_diff {
            current
        } else {
            closest
        }
    })
}
