//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing collected GitHub records and the results of analysing them.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A commit as persisted by the commit collector.
///
/// Records are immutable once fetched; `date` keeps the committer timestamp
/// exactly as the API returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full commit hash
    pub sha: String,
    /// Full commit message; only the first line is used for categorization
    pub message: String,
    /// Committer date, ISO-8601
    pub date: String,
    /// Author name as recorded in the commit
    pub author: String,
}

/// A release as persisted by the release collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    pub id: u64,
    pub name: Option<String>,
    pub tag_name: String,
    pub published_at: String,
    pub body: Option<String>,
}

/// A commit paired with its parsed timestamp.
///
/// The offset stored in the record is preserved, so hour and month buckets
/// use the commit's own zone.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedCommit {
    pub record: CommitRecord,
    pub timestamp: DateTime<FixedOffset>,
}

impl TimedCommit {
    pub fn author(&self) -> &str {
        &self.record.author
    }

    pub fn message(&self) -> &str {
        &self.record.message
    }
}

/// Ordered `(key, count)` pairs produced by one grouping.
pub type Aggregate<K = String> = Vec<(K, usize)>;

/// The result of analysing a set of commits.
///
/// Every aggregate is already in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    /// Number of commits analysed
    pub commit_count: usize,
    /// Number of distinct author names
    pub unique_authors: usize,
    /// Commits per `YYYY-MM`, ascending
    pub monthly: Aggregate,
    /// Commits per weekday, Monday through Sunday
    pub daily: Aggregate,
    /// Commits per hour of day, 0 through 23
    pub hourly: Aggregate<u32>,
    /// Most active authors, highest count first
    pub top_contributors: Aggregate,
    /// Most frequent first words of commit messages, highest count first
    pub commit_types: Aggregate,
}

impl AnalysisResult {
    /// The month with the most commits; the earliest one wins a tie.
    pub fn most_active_month(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (month, count) in &self.monthly {
            if best.map_or(true, |(_, c)| *count > c) {
                best = Some((month.as_str(), *count));
            }
        }
        best
    }
}
