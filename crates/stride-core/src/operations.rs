//! Validation of raw requests into domain types.
//!
//! Used by every interface before calling into the generator, so the command
//! line and the MCP server reject the same inputs with the same messages.

use std::str::FromStr;

use jiff::civil::Date;

use crate::{
    models::{Experience, LongRunDay, RaceInputs},
    params::{EstimatePace, GeneratePlan},
    PlannerError, Result,
};

/// Validates a race distance in meters.
///
/// ```rust
/// # use stride_core::operations::validate_race_distance;
/// assert_eq!(validate_race_distance(5000.0)?, 5000.0);
/// assert!(validate_race_distance(0.0).is_err());
/// assert!(validate_race_distance(f64::NAN).is_err());
/// # Result::<(), stride_core::PlannerError>::Ok(())
/// ```
pub fn validate_race_distance(race_distance_meters: f64) -> Result<f64> {
    if race_distance_meters.is_finite() && race_distance_meters > 0.0 {
        Ok(race_distance_meters)
    } else {
        Err(PlannerError::invalid_input("race_distance_meters")
            .with_reason(format!("must be a positive number, got {race_distance_meters}")))
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    value.trim().parse::<Date>().map_err(|e| {
        PlannerError::invalid_input(field)
            .with_reason(format!("expected a YYYY-MM-DD date, got '{value}': {e}"))
    })
}

fn positive(field: &str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => {
            Err(PlannerError::invalid_input(field).with_reason(format!("must be positive, got {v}")))
        }
        _ => Ok(value),
    }
}

fn non_negative(field: &str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(v) if !(v.is_finite() && v >= 0.0) => Err(PlannerError::invalid_input(field)
            .with_reason(format!("must not be negative, got {v}"))),
        _ => Ok(value),
    }
}

fn parse_choice<T: FromStr<Err = String>>(field: &str, value: Option<&str>) -> Result<Option<T>> {
    value
        .map(|v| T::from_str(v).map_err(|e| PlannerError::invalid_input(field).with_reason(e)))
        .transpose()
}

/// Validates estimate parameters and returns the race distance in meters.
pub fn validate_estimate(params: &EstimatePace) -> Result<f64> {
    validate_race_distance(params.race_distance_meters)
}

/// Validates plan parameters into [`RaceInputs`].
///
/// Race dates in the past are accepted here; the generator rejects them
/// with an insufficient lead time error.
///
/// # Errors
///
/// `PlannerError::InvalidInput` naming the first offending field.
///
/// # Examples
///
/// ```rust
/// use stride_core::{operations::validate_plan_request, params::GeneratePlan, models::Experience};
///
/// let mut params = GeneratePlan::new(10_000.0, "2027-03-14");
/// params.training_experience = Some("advanced".to_string());
/// let inputs = validate_plan_request(&params)?;
/// assert_eq!(inputs.training_experience, Experience::Advanced);
///
/// params.available_days_per_week = Some(9);
/// assert!(validate_plan_request(&params).is_err());
/// # Result::<(), stride_core::PlannerError>::Ok(())
/// ```
pub fn validate_plan_request(params: &GeneratePlan) -> Result<RaceInputs> {
    let race_distance_meters = validate_race_distance(params.race_distance_meters)?;
    let race_date = parse_date("race_date", &params.race_date)?;

    let goal_time_seconds = positive("goal_time_seconds", params.goal_time_seconds)?;
    let goal_pace_seconds_per_km =
        positive("goal_pace_seconds_per_km", params.goal_pace_seconds_per_km)?;
    let current_weekly_mileage_km =
        non_negative("current_weekly_mileage_km", params.current_weekly_mileage_km)?;

    let training_experience: Option<Experience> =
        parse_choice("training_experience", params.training_experience.as_deref())?;
    let preferred_long_run_day: Option<LongRunDay> =
        parse_choice("preferred_long_run_day", params.preferred_long_run_day.as_deref())?;

    if let Some(days) = params.available_days_per_week {
        if !(1..=7).contains(&days) {
            return Err(PlannerError::invalid_input("available_days_per_week")
                .with_reason(format!("must be between 1 and 7, got {days}")));
        }
    }

    Ok(RaceInputs {
        race_distance_meters,
        race_date,
        goal_time_seconds,
        goal_pace_seconds_per_km,
        current_weekly_mileage_km,
        injury_history: params
            .injury_history
            .as_ref()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        training_experience: training_experience.unwrap_or_default(),
        available_days_per_week: params.available_days_per_week,
        preferred_long_run_day: preferred_long_run_day.unwrap_or_default(),
    })
}
