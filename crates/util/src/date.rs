//! Date formatting in the `en-US` style.
//!
//! Text inputs are parsed as UTC (offsets in RFC 3339 / RFC 2822 input are
//! honoured and converted), and rendering happens in UTC, so results do not
//! depend on the machine's time zone. Anything that cannot be read as a date
//! renders as [`INVALID_DATE`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Rendered for input that is not a date.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

/// How much of a date [`format_date`] writes out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `Apr 22, 2024`
    #[default]
    Short,
    /// `April 22, 2024`
    Medium,
    /// `Monday, April 22, 2024`
    Long,
    /// `Monday, April 22, 2024 at 09:05 AM`
    Full,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Short => "%b %-d, %Y",
            DateFormat::Medium => "%B %-d, %Y",
            DateFormat::Long => "%A, %B %-d, %Y",
            DateFormat::Full => "%A, %B %-d, %Y at %I:%M %p",
        }
    }
}

/// A date given as text or as an already-resolved instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateInput<'a> {
    Text(&'a str),
    Instant(DateTime<Utc>),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text)
    }
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(instant: DateTime<Utc>) -> Self {
        DateInput::Instant(instant)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(naive: NaiveDateTime) -> Self {
        DateInput::Instant(Utc.from_utc_datetime(&naive))
    }
}

impl From<NaiveDate> for DateInput<'_> {
    /// Midnight UTC of the given day.
    fn from(date: NaiveDate) -> Self {
        DateInput::Instant(Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)))
    }
}

impl DateInput<'_> {
    /// The instant this input denotes, or `None` if it is not a date.
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            DateInput::Text(text) => parse_date(text),
            DateInput::Instant(instant) => Some(*instant),
        }
    }
}

/// Parse a date string.
///
/// Accepts RFC 3339, RFC 2822, ISO-like date-times without an offset
/// (read as UTC) and a few common date-only layouts (midnight UTC).
///
/// # Examples
///
/// ```
/// use casoon_util::date::parse_date;
///
/// let date = parse_date("2024-04-22").unwrap();
/// assert_eq!(date.to_rfc3339(), "2024-04-22T00:00:00+00:00");
/// assert!(parse_date("2024-02-30").is_none());
/// assert!(parse_date("").is_none());
/// ```
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return DateInput::from(date).resolve();
        }
    }

    None
}

/// Format a date for display.
///
/// Returns [`INVALID_DATE`] (and logs a warning) when `input` is not a date.
///
/// # Examples
///
/// ```
/// use casoon_util::date::{format_date, DateFormat};
///
/// assert_eq!(format_date("2024-04-22", DateFormat::Short), "Apr 22, 2024");
/// assert_eq!(format_date("2024-04-22", DateFormat::Medium), "April 22, 2024");
/// assert_eq!(format_date("2024-04-22", DateFormat::Long), "Monday, April 22, 2024");
/// assert_eq!(format_date("invalid-date", DateFormat::Short), "Invalid Date");
/// ```
pub fn format_date<'a>(input: impl Into<DateInput<'a>>, format: DateFormat) -> String {
    let input = input.into();
    match input.resolve() {
        Some(instant) => instant.format(format.pattern()).to_string(),
        None => {
            warn!(?input, "invalid date provided to format_date");
            INVALID_DATE.to_string()
        }
    }
}

/// [`format_date`] with [`DateFormat::Short`].
pub fn format_date_default<'a>(input: impl Into<DateInput<'a>>) -> String {
    format_date(input, DateFormat::default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    fn name(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
        }
    }
}

/// Largest unit first; a month is a twelfth of a 365-day year.
const INTERVALS: [(Unit, f64); 5] = [
    (Unit::Year, 31_536_000.0),
    (Unit::Month, 2_628_000.0),
    (Unit::Day, 86_400.0),
    (Unit::Hour, 3_600.0),
    (Unit::Minute, 60.0),
];

/// Describe a date relative to now, such as `"2 days ago"` or `"in 3 hours"`.
///
/// Returns [`INVALID_DATE`] when `input` is not a date.
pub fn format_relative_date<'a>(input: impl Into<DateInput<'a>>) -> String {
    format_relative_date_from(input, Utc::now())
}

/// [`format_relative_date`] measured from `now` instead of the system clock.
///
/// The largest unit with a whole count of at least one is used, counts are
/// truncated, and neighbouring values read naturally ("yesterday",
/// "next month", "now").
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use casoon_util::date::format_relative_date_from;
///
/// let now = Utc.with_ymd_and_hms(2024, 4, 22, 12, 0, 0).unwrap();
/// assert_eq!(format_relative_date_from("2024-04-20", now), "2 days ago");
/// assert_eq!(format_relative_date_from("2024-04-22T15:00:00Z", now), "in 3 hours");
/// ```
pub fn format_relative_date_from<'a>(
    input: impl Into<DateInput<'a>>,
    now: DateTime<Utc>,
) -> String {
    let Some(date) = input.into().resolve() else {
        return INVALID_DATE.to_string();
    };

    let diff = (date - now).num_milliseconds() as f64 / 1000.0;
    for (unit, seconds) in INTERVALS {
        let count = (diff.abs() / seconds).floor() as i64;
        if count >= 1 {
            return relative_phrase(if diff < 0.0 { -count } else { count }, unit);
        }
    }

    relative_phrase(diff.floor() as i64, Unit::Second)
}

fn relative_phrase(value: i64, unit: Unit) -> String {
    let name = unit.name();
    match (value, unit) {
        (0, Unit::Second) => "now".to_string(),
        (0, Unit::Day) => "today".to_string(),
        (0, _) => format!("this {name}"),
        (-1, Unit::Day) => "yesterday".to_string(),
        (1, Unit::Day) => "tomorrow".to_string(),
        (-1, Unit::Year | Unit::Month) => format!("last {name}"),
        (1, Unit::Year | Unit::Month) => format!("next {name}"),
        _ => {
            let n = value.unsigned_abs();
            let plural = if n == 1 { "" } else { "s" };
            if value < 0 {
                format!("{n} {name}{plural} ago")
            } else {
                format!("in {n} {name}{plural}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 22, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_date_full() {
        assert_eq!(
            format_date("2024-04-22T09:05:00Z", DateFormat::Full),
            "Monday, April 22, 2024 at 09:05 AM"
        );
        assert_eq!(
            format_date("2024-04-22 21:30", DateFormat::Full),
            "Monday, April 22, 2024 at 09:30 PM"
        );
    }

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(format_date("invalid-date", DateFormat::Short), INVALID_DATE);
        assert_eq!(format_date("", DateFormat::Short), INVALID_DATE);
        assert_eq!(format_date("2024-13-01", DateFormat::Long), INVALID_DATE);
    }

    #[test]
    fn test_format_date_default_is_short() {
        let formatted = format_date_default("2024-04-22");
        assert_eq!(formatted, "Apr 22, 2024");
        assert!(formatted.contains("2024"));
    }

    #[test]
    fn test_format_date_converts_offsets_to_utc() {
        assert_eq!(
            format_date("2024-04-22T23:30:00-02:00", DateFormat::Short),
            "Apr 23, 2024"
        );
    }

    #[test]
    fn test_format_date_typed_inputs() {
        let day = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(format_date(day, DateFormat::Short), "Apr 1, 2024");
        assert_eq!(format_date(noon(), DateFormat::Medium), "April 22, 2024");

        let owned = String::from("2024/12/31");
        assert_eq!(format_date(&owned, DateFormat::Long), "Tuesday, December 31, 2024");
    }

    #[test]
    fn test_parse_date_layouts() {
        let expected = Utc.with_ymd_and_hms(2024, 4, 22, 0, 0, 0).unwrap();
        for text in ["2024-04-22", "2024/04/22", "04/22/2024", "April 22, 2024", "Apr 22, 2024"] {
            assert_eq!(parse_date(text), Some(expected), "{text}");
        }
        assert_eq!(parse_date("Mon, 22 Apr 2024 12:00:00 +0000"), Some(noon()));
    }

    #[test]
    fn test_date_format_serde() {
        let format: DateFormat = serde_json::from_str("\"long\"").unwrap();
        assert_eq!(format, DateFormat::Long);
        assert_eq!(serde_json::to_string(&DateFormat::Full).unwrap(), "\"full\"");
    }

    #[test]
    fn test_relative_past_units() {
        let now = noon();
        assert_eq!(format_relative_date_from(now - Duration::seconds(30), now), "30 seconds ago");
        assert_eq!(format_relative_date_from(now - Duration::seconds(61), now), "1 minute ago");
        assert_eq!(format_relative_date_from(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(format_relative_date_from("2024-04-21T12:00:00Z", now), "yesterday");
        assert_eq!(format_relative_date_from("2024-01-01", now), "3 months ago");
        assert_eq!(format_relative_date_from("2023-04-22T12:00:00Z", now), "last year");
        assert_eq!(format_relative_date_from("2020-04-22", now), "4 years ago");
    }

    #[test]
    fn test_relative_future_units() {
        let now = noon();
        assert_eq!(format_relative_date_from(now + Duration::minutes(1), now), "in 1 minute");
        assert_eq!(format_relative_date_from(now + Duration::days(1), now), "tomorrow");
        assert_eq!(format_relative_date_from(now + Duration::days(10), now), "in 10 days");
        assert_eq!(format_relative_date_from(now + Duration::days(40), now), "next month");
    }

    #[test]
    fn test_relative_now_and_sub_second() {
        let now = noon();
        assert_eq!(format_relative_date_from(now, now), "now");
        assert_eq!(format_relative_date_from(now + Duration::milliseconds(500), now), "now");
        assert_eq!(
            format_relative_date_from(now - Duration::milliseconds(500), now),
            "1 second ago"
        );
    }

    #[test]
    fn test_relative_invalid() {
        assert_eq!(format_relative_date_from("soon", noon()), INVALID_DATE);
        assert_eq!(format_relative_date("not a date"), INVALID_DATE);
    }
}
