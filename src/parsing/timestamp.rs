//! Timestamp normalization for header captures.
//!
//! Chat exports print dates as `A/B/Y`. Which of `A` and `B` is the month
//! depends on the phone's locale and is not recoverable from a single line,
//! so the order is a fixed convention: **month first, day second**.
//!
//! Years with two digits are pivoted at 50 (`24` → 2024, `87` → 1987).
//! Hours follow the meridiem marker when one is present, otherwise they are
//! read as 24-hour values.

use chrono::{NaiveDate, NaiveDateTime};

/// Clock convention of a header's time capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStyle {
    /// `10:30 PM`
    TwelveHour(Meridiem),
    /// `22:30`
    TwentyFourHour,
}

/// AM/PM marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl ClockStyle {
    /// Detects the clock style from a time capture such as `"10:30:45 PM"`.
    pub fn detect(time_str: &str) -> Self {
        match meridiem_suffix(time_str.trim()) {
            Some((_, meridiem)) => ClockStyle::TwelveHour(meridiem),
            None => ClockStyle::TwentyFourHour,
        }
    }

    /// Converts an hour as printed into a 0-23 hour.
    fn adjust_hour(self, hour: u32) -> u32 {
        match self {
            ClockStyle::TwelveHour(Meridiem::Pm) if hour != 12 => hour + 12,
            ClockStyle::TwelveHour(Meridiem::Am) if hour == 12 => 0,
            _ => hour,
        }
    }
}

/// Splits a trailing `AM`/`PM` marker off a time string.
fn meridiem_suffix(time: &str) -> Option<(&str, Meridiem)> {
    let split = time.len().checked_sub(2)?;
    if !time.is_char_boundary(split) {
        return None;
    }
    let (clock, marker) = time.split_at(split);

    let meridiem = if marker.eq_ignore_ascii_case("am") {
        Meridiem::Am
    } else if marker.eq_ignore_ascii_case("pm") {
        Meridiem::Pm
    } else {
        return None;
    };

    Some((clock.trim_end(), meridiem))
}

/// Expands a printed year to a full year.
///
/// `y < 50` → `2000 + y`, `50 <= y < 100` → `1900 + y`, anything else as-is.
pub fn expand_year(year: i32) -> i32 {
    match year {
        0..=49 => 2000 + year,
        50..=99 => 1900 + year,
        _ => year,
    }
}

/// Converts a header's date and time captures into a local timestamp.
///
/// Returns `None` when the captures don't describe a real calendar instant
/// (month 13, February 30th, `13:00 PM`, ...).
///
/// # Example
///
/// ```
/// use linkpulse::parsing::normalize_timestamp;
/// use chrono::NaiveDate;
///
/// let ts = normalize_timestamp("1/15/24", "10:30 PM").unwrap();
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
///     .unwrap()
///     .and_hms_opt(22, 30, 0)
///     .unwrap();
/// assert_eq!(ts, expected);
/// ```
pub fn normalize_timestamp(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    let mut date_parts = date_str.trim().split('/');
    let month: u32 = date_parts.next()?.parse().ok()?;
    let day: u32 = date_parts.next()?.parse().ok()?;
    let year: i32 = date_parts.next()?.parse().ok()?;
    if date_parts.next().is_some() {
        return None;
    }

    let time = time_str.trim();
    let style = ClockStyle::detect(time);
    let clock = meridiem_suffix(time).map_or(time, |(clock, _)| clock);

    let mut time_parts = clock.split(':');
    let hour: u32 = time_parts.next()?.trim().parse().ok()?;
    let minute: u32 = match time_parts.next() {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };
    let second: u32 = match time_parts.next() {
        Some(s) => s.trim().parse().ok()?,
        None => 0,
    };

    NaiveDate::from_ymd_opt(expand_year(year), month, day)?.and_hms_opt(
        style.adjust_hour(hour),
        minute,
        second,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_month_first_convention() {
        assert_eq!(
            normalize_timestamp("1/15/24", "10:30"),
            Some(at(2024, 1, 15, 10, 30, 0))
        );
        // 3/4 is March 4th, never April 3rd
        assert_eq!(
            normalize_timestamp("3/4/2024", "09:00"),
            Some(at(2024, 3, 4, 9, 0, 0))
        );
    }

    #[test]
    fn test_day_first_input_is_rejected_when_impossible() {
        assert_eq!(normalize_timestamp("15/01/2024", "10:30"), None);
    }

    #[test]
    fn test_expand_year() {
        assert_eq!(expand_year(0), 2000);
        assert_eq!(expand_year(24), 2024);
        assert_eq!(expand_year(49), 2049);
        assert_eq!(expand_year(50), 1950);
        assert_eq!(expand_year(99), 1999);
        assert_eq!(expand_year(100), 100);
        assert_eq!(expand_year(2024), 2024);
    }

    #[test]
    fn test_meridiem_adjustment() {
        assert_eq!(
            normalize_timestamp("1/15/24", "1:05 PM"),
            Some(at(2024, 1, 15, 13, 5, 0))
        );
        assert_eq!(
            normalize_timestamp("1/15/24", "12:10 PM"),
            Some(at(2024, 1, 15, 12, 10, 0))
        );
        assert_eq!(
            normalize_timestamp("1/15/24", "12:10 AM"),
            Some(at(2024, 1, 15, 0, 10, 0))
        );
        assert_eq!(
            normalize_timestamp("1/15/24", "11:59AM"),
            Some(at(2024, 1, 15, 11, 59, 0))
        );
    }

    #[test]
    fn test_no_marker_is_24_hour() {
        assert_eq!(
            normalize_timestamp("6/1/24", "23:15"),
            Some(at(2024, 6, 1, 23, 15, 0))
        );
        assert_eq!(
            normalize_timestamp("6/1/24", "12:00"),
            Some(at(2024, 6, 1, 12, 0, 0))
        );
    }

    #[test]
    fn test_seconds_are_kept() {
        assert_eq!(
            normalize_timestamp("1/15/24", "10:30:45 AM"),
            Some(at(2024, 1, 15, 10, 30, 45))
        );
    }

    #[test]
    fn test_missing_minutes_default_to_zero() {
        assert_eq!(
            normalize_timestamp("1/15/24", "7 PM"),
            Some(at(2024, 1, 15, 19, 0, 0))
        );
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(normalize_timestamp("13/1/24", "10:00"), None);
        assert_eq!(normalize_timestamp("2/30/24", "10:00"), None);
        assert_eq!(normalize_timestamp("1/15/24", "13:00 PM"), None);
        assert_eq!(normalize_timestamp("1/15/24", "25:00"), None);
        assert_eq!(normalize_timestamp("1/15", "10:00"), None);
        assert_eq!(normalize_timestamp("a/b/c", "10:00"), None);
    }

    #[test]
    fn test_clock_style_detect() {
        assert_eq!(
            ClockStyle::detect("10:30 PM"),
            ClockStyle::TwelveHour(Meridiem::Pm)
        );
        assert_eq!(
            ClockStyle::detect("10:30:00 AM"),
            ClockStyle::TwelveHour(Meridiem::Am)
        );
        assert_eq!(ClockStyle::detect("22:30"), ClockStyle::TwentyFourHour);
    }

    #[test]
    fn test_narrow_no_break_space_before_marker() {
        // Recent iOS exports put U+202F between the time and the marker
        assert_eq!(
            normalize_timestamp("1/15/24", "9:15\u{202f}PM"),
            Some(at(2024, 1, 15, 21, 15, 0))
        );
    }
}
