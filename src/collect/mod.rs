//! # Collectors
//!
//! Fetch commit and release history for one repository and flatten it into
//! the records that get persisted.

use tracing::{debug, info, warn};

use crate::config::RepoRef;
use crate::error::Result;
use crate::github::{ApiRelease, GitHubClient};
use crate::types::{CommitRecord, ReleaseRecord};
use crate::utils::dates::parse_timestamp;
use crate::utils::DateRange;

/// Commits in `range`, newest first as GitHub returns them.
pub async fn collect_commits(
    client: &GitHubClient,
    repo: &RepoRef,
    range: &DateRange,
) -> Result<Vec<CommitRecord>> {
    info!(%repo, range = %range.label(), "fetching commits");
    let items = client.list_commits(repo, range).await?;
    Ok(items.into_iter().map(CommitRecord::from).collect())
}

/// Releases published in `range`.
///
/// The releases endpoint has no date parameters, so every release is fetched
/// and filtered here.
pub async fn collect_releases(
    client: &GitHubClient,
    repo: &RepoRef,
    range: &DateRange,
) -> Result<Vec<ReleaseRecord>> {
    info!(%repo, range = %range.label(), "fetching releases");
    let items = client.list_releases(repo).await?;
    Ok(releases_in_range(items, range))
}

/// Keep published releases whose `published_at` falls inside `range`.
pub fn releases_in_range(items: Vec<ApiRelease>, range: &DateRange) -> Vec<ReleaseRecord> {
    items
        .into_iter()
        .filter_map(|item| {
            let id = item.id;
            let Some(record) = item.into_record() else {
                debug!(id, "skipping unpublished release");
                return None;
            };
            match parse_timestamp(&record.published_at) {
                Ok(published) if range.contains(&published) => Some(record),
                Ok(_) => None,
                Err(e) => {
                    warn!(id, error = %e, "skipping release with unreadable publish date");
                    None
                }
            }
        })
        .collect()
}
