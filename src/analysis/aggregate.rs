use chrono::{Datelike, Timelike, Weekday};
use std::collections::BTreeMap;

use crate::types::{Aggregate, TimedCommit};

/// Display order for the weekday grouping.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Commits per `YYYY-MM`, ascending. Months without commits are absent.
pub fn by_month(commits: &[TimedCommit]) -> Aggregate {
    let mut months: BTreeMap<String, usize> = BTreeMap::new();
    for commit in commits {
        *months
            .entry(commit.timestamp.format("%Y-%m").to_string())
            .or_insert(0) += 1;
    }
    months.into_iter().collect()
}

/// Commits per weekday, always seven entries from Monday to Sunday.
pub fn by_weekday(commits: &[TimedCommit]) -> Aggregate {
    let mut counts = [0usize; 7];
    for commit in commits {
        counts[commit.timestamp.weekday().num_days_from_monday() as usize] += 1;
    }
    WEEKDAYS
        .iter()
        .zip(counts)
        .map(|(day, count)| (weekday_name(*day).to_string(), count))
        .collect()
}

/// Commits per hour of day in each commit's own zone, always 24 entries.
pub fn by_hour(commits: &[TimedCommit]) -> Aggregate<u32> {
    let mut counts = [0usize; 24];
    for commit in commits {
        counts[commit.timestamp.hour() as usize] += 1;
    }
    (0..24).zip(counts).collect()
}
