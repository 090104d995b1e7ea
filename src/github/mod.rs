//! GitHub REST API access

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{ApiCommit, ApiRelease};
