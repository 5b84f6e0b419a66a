//! Historical run records supplied by the activity store.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One historical run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RunRecord {
    /// Calendar date the run took place
    pub date: Date,

    /// Distance covered in meters
    pub distance_meters: f64,

    /// Elapsed time in seconds
    pub duration_seconds: f64,
}

impl RunRecord {
    /// Creates a run record.
    pub fn new(date: Date, distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            date,
            distance_meters,
            duration_seconds,
        }
    }

    /// A run can only contribute to pace arithmetic when both distance and
    /// duration are strictly positive.
    pub fn is_valid(&self) -> bool {
        self.distance_meters > 0.0 && self.duration_seconds > 0.0
    }

    /// Distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// Pace in seconds per kilometer. Only meaningful for valid runs.
    pub fn pace_seconds_per_km(&self) -> f64 {
        self.duration_seconds / self.distance_km()
    }
}
