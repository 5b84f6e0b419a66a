//! Calendar date display utilities.

use std::fmt;

use jiff::civil::{Date, Weekday};

/// English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}

/// Month and day, e.g. `Nov 2`.
pub struct ShortDate(pub Date);

impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%b %-d"))
    }
}

/// Full date, e.g. `November 2, 2026`.
pub struct LongDate(pub Date);

impl fmt::Display for LongDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%B %-d, %Y"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(date(2026, 11, 2).weekday()), "Monday");
        assert_eq!(weekday_name(date(2026, 11, 8).weekday()), "Sunday");
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(ShortDate(date(2026, 11, 2)).to_string(), "Nov 2");
        assert_eq!(LongDate(date(2027, 1, 31)).to_string(), "January 31, 2027");
    }
}
