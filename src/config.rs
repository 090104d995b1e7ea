//! # Configuration
//!
//! Defaults shared by the collectors and the analyzer, plus the small
//! structs that carry command-line settings into the library.

use std::fmt;
use std::path::PathBuf;

/// Public GitHub REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Largest page size the GitHub REST API accepts.
pub const PER_PAGE: u32 = 100;
pub const DEFAULT_OWNER: &str = "tektoncd";
pub const DEFAULT_REPO: &str = "pipeline";
pub const DEFAULT_SINCE: &str = "2024-01-01";
pub const DEFAULT_UNTIL: &str = "2025-03-31";
/// Commit file read by `analyze` when no `--input` is given.
pub const DEFAULT_COMMITS_FILE: &str = "tektoncd_pipeline_commits.json";
pub const DEFAULT_CHART_DIR: &str = "charts";
/// Author substring that marks a commit as automated.
pub const DEFAULT_BOT_PATTERN: &str = "dependabot";
/// Length of the contributor and commit-type rankings.
pub const TOP_N: usize = 10;
/// Length of the rankings printed in the text summary.
pub const SUMMARY_TOP_N: usize = 5;

/// Settings for talking to the GitHub API.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Base URL without trailing slash
    pub api_url: String,
    /// Personal access token, sent as `Authorization: token ...`
    pub token: Option<String>,
}

impl GitHubConfig {
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { api_url, token }
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, None)
    }
}

/// An `owner/name` repository reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Default output file for a collector, e.g. `tektoncd_pipeline_commits.json`.
    pub fn default_output(&self, kind: &str) -> PathBuf {
        PathBuf::from(format!("{}_{}_{}.json", self.owner, self.name, kind))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
