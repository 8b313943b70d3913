//! Occurrence-date arithmetic for reminders.
//!
//! Resolves an event's date into the concrete calendar date its reminder
//! logic evaluates against in the current year (yearly events get the year
//! replaced), and measures day distances as the dashboard did: the ceiling
//! of the interval between the occurrence's midnight and now.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::event::Event;

const SECS_PER_DAY: i64 = 86_400;

/// Parse an API date string. The API has served both bare `YYYY-MM-DD`
/// dates and full RFC 3339 timestamps; accept either.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

/// The concrete date a reminder evaluates against in `today`'s year.
///
/// One-shot events keep their date as-is. Yearly events get the year
/// replaced; Feb 29 rolls over to Mar 1 in non-leap years.
pub fn occurrence_date(date: NaiveDate, yearly: bool, today: NaiveDate) -> NaiveDate {
    if !yearly {
        return date;
    }
    date.with_year(today.year())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(today.year(), 3, 1).unwrap())
}

/// Resolve an event's occurrence for `now`, or `None` when its date is
/// malformed (such events are never due).
pub fn event_occurrence(event: &Event, now: DateTime<Utc>) -> Option<NaiveDate> {
    let date = event.date()?;
    Some(occurrence_date(date, event.is_yearly(), now.date_naive()))
}

/// Days until `occurrence`: `ceil((occurrence midnight UTC - now) / 1 day)`.
///
/// Zero on the day itself, negative once it has passed. At 10:00 on
/// June 12, an occurrence of June 15 is 3 days out.
pub fn days_until(occurrence: NaiveDate, now: DateTime<Utc>) -> i64 {
    let midnight = occurrence.and_hms_opt(0, 0, 0).unwrap().and_utc();
    let secs = (midnight - now).num_seconds();
    let days = secs.div_euclid(SECS_PER_DAY);
    if secs.rem_euclid(SECS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_bare_date() {
        assert_eq!(parse_date("2024-06-15"), Some(date(2024, 6, 15)));
    }

    #[test]
    fn test_parse_rfc3339_timestamp() {
        assert_eq!(
            parse_date("2024-06-15T00:00:00.000Z"),
            Some(date(2024, 6, 15))
        );
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("15/06/2024"), None);
    }

    #[test]
    fn test_one_shot_occurrence_is_unchanged() {
        assert_eq!(
            occurrence_date(date(2023, 6, 15), false, date(2024, 6, 1)),
            date(2023, 6, 15)
        );
    }

    #[test]
    fn test_yearly_occurrence_replaces_year() {
        assert_eq!(
            occurrence_date(date(2023, 6, 15), true, date(2024, 6, 1)),
            date(2024, 6, 15)
        );
    }

    #[test]
    fn test_feb_29_rolls_over_in_non_leap_years() {
        assert_eq!(
            occurrence_date(date(2024, 2, 29), true, date(2025, 1, 1)),
            date(2025, 3, 1)
        );
        // Leap year keeps the real date
        assert_eq!(
            occurrence_date(date(2024, 2, 29), true, date(2028, 1, 1)),
            date(2028, 2, 29)
        );
    }

    #[test]
    fn test_days_until_rounds_up() {
        // 10:00 on June 12 -> June 15 is 2.58 days away, counted as 3
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 10, 0, 0).unwrap();
        assert_eq!(days_until(date(2024, 6, 15), now), 3);
    }

    #[test]
    fn test_days_until_is_zero_on_the_day() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(days_until(date(2024, 6, 15), now), 0);

        // Exactly midnight is also the day itself
        let midnight = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        assert_eq!(days_until(date(2024, 6, 15), midnight), 0);
    }

    #[test]
    fn test_days_until_negative_after_passing() {
        let now = Utc.with_ymd_and_hms(2024, 6, 16, 12, 0, 0).unwrap();
        assert_eq!(days_until(date(2024, 6, 15), now), -1);
    }
}
