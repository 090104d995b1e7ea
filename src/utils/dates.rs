use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::{Result, StatsError};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

fn as_utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    Utc.from_utc_datetime(&naive).into()
}

fn end_of_day(day: NaiveDate) -> Option<NaiveDateTime> {
    day.and_hms_opt(23, 59, 59)
}

/// Parse a stored timestamp, keeping its offset.
///
/// Timestamps without an offset, and bare dates, are taken to be UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt);
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(as_utc(naive));
        }
    }
    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(as_utc(day.and_time(NaiveTime::MIN)));
    }

    Err(StatsError::InvalidTimestamp(value.to_string()))
}

/// Parse a strict `YYYY-MM-DD` day.
pub fn parse_day(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| StatsError::InvalidDate(value.to_string()))
}

/// Parse either bound of an analysis range.
///
/// Accepts `YYYY-MM-DD` (midnight UTC) or a full timestamp. Both bounds are
/// inclusive instants, so a bare end day admits only its first instant.
pub fn parse_date_bound(value: &str) -> Result<DateTime<FixedOffset>> {
    parse_timestamp(value).map_err(|_| StatsError::InvalidDate(value.to_string()))
}

/// An inclusive range of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl DateRange {
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self { start, end }
    }

    /// `since` 00:00:00 UTC through `until` 23:59:59 UTC.
    pub fn from_days(since: NaiveDate, until: NaiveDate) -> Result<Self> {
        let end = end_of_day(until)
            .ok_or_else(|| StatsError::InvalidDate(until.to_string()))?;
        Ok(Self {
            start: as_utc(since.and_time(NaiveTime::MIN)),
            end: as_utc(end),
        })
    }

    /// Smallest range covering every timestamp, or `None` when there are none.
    pub fn spanning<'a, I>(timestamps: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a DateTime<FixedOffset>>,
    {
        let mut iter = timestamps.into_iter();
        let first = *iter.next()?;
        let (start, end) = iter.fold((first, first), |(lo, hi), ts| {
            (if *ts < lo { *ts } else { lo }, if *ts > hi { *ts } else { hi })
        });
        Some(Self { start, end })
    }

    pub fn contains(&self, timestamp: &DateTime<FixedOffset>) -> bool {
        self.start <= *timestamp && *timestamp <= self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn approx_months(&self) -> f64 {
        self.days() as f64 / 30.0
    }

    /// `YYYY-MM-DD to YYYY-MM-DD`, used in chart titles and reports.
    pub fn label(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }

    /// Lower bound in the `since` form the GitHub API expects.
    pub fn api_since(&self) -> String {
        self.start.with_timezone(&Utc).format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    /// Upper bound in the `until` form the GitHub API expects.
    pub fn api_until(&self) -> String {
        self.end.with_timezone(&Utc).format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339_keeps_offset() {
        let ts = parse_timestamp("2024-01-05T10:30:00+02:00").unwrap();
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.offset().local_minus_utc(), 7200);

        let zulu = parse_timestamp("2024-01-05T10:30:00Z").unwrap();
        assert_eq!(zulu.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_naive_is_utc() {
        let naive = parse_timestamp("2024-01-05T10:30:00").unwrap();
        let zulu = parse_timestamp("2024-01-05T10:30:00Z").unwrap();
        assert_eq!(naive, zulu);

        let spaced = parse_timestamp("2024-01-05 10:30:00.250").unwrap();
        assert_eq!(spaced.minute(), 30);
    }

    #[test]
    fn test_parse_bad_timestamp() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(StatsError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_invalid_date_message() {
        let err = parse_date_bound("2024/01/05").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date format: 2024/01/05. Please use YYYY-MM-DD format."
        );
        assert!(parse_day("2024-13-01").is_err());
    }

    #[test]
    fn test_bare_end_date_is_midnight() {
        let end = parse_date_bound("2024-02-10").unwrap();
        assert_eq!(end, parse_timestamp("2024-02-10T00:00:00Z").unwrap());

        let range = DateRange::new(parse_date_bound("2024-02-01").unwrap(), end);
        assert!(range.contains(&parse_timestamp("2024-02-01T10:00:00Z").unwrap()));
        assert!(range.contains(&parse_timestamp("2024-02-10T00:00:00Z").unwrap()));
        assert!(!range.contains(&parse_timestamp("2024-02-10T11:00:00Z").unwrap()));

        let exact = parse_date_bound("2024-01-05T12:00:00Z").unwrap();
        assert_eq!(exact.hour(), 12);
    }

    #[test]
    fn test_range_from_days() {
        let range = DateRange::from_days(
            parse_day("2024-01-01").unwrap(),
            parse_day("2025-03-31").unwrap(),
        )
        .unwrap();
        assert_eq!(range.api_since(), "2024-01-01T00:00:00Z");
        assert_eq!(range.api_until(), "2025-03-31T23:59:59Z");
        assert_eq!(range.label(), "2024-01-01 to 2025-03-31");
        assert_eq!(range.days(), 455);
    }

    #[test]
    fn test_range_compares_instants() {
        let range = DateRange::new(
            parse_timestamp("2024-01-05T00:00:00Z").unwrap(),
            parse_timestamp("2024-01-05T23:59:59Z").unwrap(),
        );
        // 01:00 at +02:00 is 23:00 the previous day in UTC
        assert!(!range.contains(&parse_timestamp("2024-01-05T01:00:00+02:00").unwrap()));
        assert!(range.contains(&parse_timestamp("2024-01-06T01:00:00+02:00").unwrap()));
    }

    #[test]
    fn test_spanning() {
        let stamps = [
            parse_timestamp("2024-02-10T00:00:00Z").unwrap(),
            parse_timestamp("2024-01-05T00:00:00Z").unwrap(),
            parse_timestamp("2024-03-01T00:00:00Z").unwrap(),
        ];
        let range = DateRange::spanning(&stamps).unwrap();
        assert_eq!(range.start, stamps[1]);
        assert_eq!(range.end, stamps[2]);
        assert!(DateRange::spanning(std::iter::empty()).is_none());
    }
}
