//! # Commit Analysis
//!
//! Turns persisted commit records into time buckets and rankings.

pub mod aggregate;
pub mod filter;
mod pipeline;
pub mod ranking;
pub mod summary;

pub use filter::{filter_bots, filter_by_date, BotFilter};
pub use pipeline::{run_analysis, AnalysisReport, AnalyzeOptions, AnalyzeOutcome};
pub use summary::render_summary;

use crate::config::TOP_N;
use crate::error::Result;
use crate::types::{AnalysisResult, CommitRecord, TimedCommit};
use crate::utils::dates::parse_timestamp;

/// Parse each record's date, failing on the first one that cannot be read.
pub fn parse_commits(records: Vec<CommitRecord>) -> Result<Vec<TimedCommit>> {
    records
        .into_iter()
        .map(|record| {
            let timestamp = parse_timestamp(&record.date)?;
            Ok(TimedCommit { record, timestamp })
        })
        .collect()
}

/// Compute every aggregate over an already filtered commit set.
pub fn analyze(commits: &[TimedCommit]) -> AnalysisResult {
    AnalysisResult {
        commit_count: commits.len(),
        unique_authors: ranking::unique_authors(commits),
        monthly: aggregate::by_month(commits),
        daily: aggregate::by_weekday(commits),
        hourly: aggregate::by_hour(commits),
        top_contributors: ranking::top_contributors(commits, TOP_N),
        commit_types: ranking::commit_types(commits, TOP_N),
    }
}
