//! Pace and duration formatting.

/// Formats a pace in seconds per km as `M:SS/km`.
///
/// Minutes and seconds are floored; seconds are zero-padded.
///
/// ```rust
/// use stride_core::display::format_pace;
///
/// assert_eq!(format_pace(300.0), "5:00/km");
/// assert_eq!(format_pace(291.7), "4:51/km");
/// assert_eq!(format_pace(65.0), "1:05/km");
/// ```
pub fn format_pace(seconds_per_km: f64) -> String {
    let total = seconds_per_km.max(0.0).floor() as u64;
    format!("{}:{:02}/km", total / 60, total % 60)
}

/// Formats a duration in seconds as `H:MM:SS`, or `M:SS` under an hour.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
