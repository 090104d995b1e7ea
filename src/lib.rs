//! # GitHub Repository Statistics Library
//!
//! `repostats` collects the commit and release history of a GitHub repository
//! and turns it into descriptive statistics and bar charts.
//!
//! ## Features
//!
//! - Fetch commits in a date range through the GitHub REST API
//! - Fetch releases and keep those published in a date range
//! - Persist both as pretty-printed JSON
//! - Filter out bot commits and commits outside an analysis period
//! - Count commits per month, weekday and hour of day
//! - Rank top contributors and commit message types
//! - Render each grouping as a PNG bar chart
//!
//! ## Example
//!
//! ```no_run
//! use repostats::analysis::{run_analysis, AnalyzeOptions};
//!
//! let options = AnalyzeOptions {
//!     start: Some("2024-01-01".to_string()),
//!     end: Some("2024-03-31".to_string()),
//!     ..AnalyzeOptions::default()
//! };
//! run_analysis(&options).unwrap();
//! ```

pub mod analysis;
pub mod app;
pub mod collect;
pub mod config;
pub mod error;
pub mod github;
pub mod plotting;
pub mod storage;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use error::{Result, StatsError};
pub use types::{AnalysisResult, CommitRecord, ReleaseRecord, TimedCommit};
