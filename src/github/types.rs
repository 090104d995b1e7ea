//! GitHub API response shapes
//!
//! Only the fields the collectors flatten into records are modelled; serde
//! ignores the rest of each payload.

use serde::Deserialize;

use crate::types::{CommitRecord, ReleaseRecord};

/// One item of `GET /repos/{owner}/{repo}/commits`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCommit {
    pub sha: String,
    pub commit: ApiCommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCommitDetail {
    pub message: String,
    pub author: ApiSignature,
    pub committer: ApiSignature,
}

/// Git author or committer signature
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSignature {
    pub name: String,
    pub date: String,
}

/// One item of `GET /repos/{owner}/{repo}/releases`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRelease {
    pub id: u64,
    pub name: Option<String>,
    pub tag_name: String,
    /// `None` for draft releases
    pub published_at: Option<String>,
    pub body: Option<String>,
}

impl From<ApiCommit> for CommitRecord {
    fn from(item: ApiCommit) -> Self {
        CommitRecord {
            sha: item.sha,
            message: item.commit.message,
            date: item.commit.committer.date,
            author: item.commit.author.name,
        }
    }
}

impl ApiRelease {
    /// Flatten into a record; unpublished releases have nothing to date them by.
    pub fn into_record(self) -> Option<ReleaseRecord> {
        let published_at = self.published_at?;
        Some(ReleaseRecord {
            id: self.id,
            name: self.name,
            tag_name: self.tag_name,
            published_at,
            body: self.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_flattening_uses_committer_date_and_author_name() {
        let item: ApiCommit = serde_json::from_value(serde_json::json!({
            "sha": "abc123",
            "url": "https://api.github.com/repos/o/r/commits/abc123",
            "commit": {
                "message": "fix: handle empty pages\n\nlonger body",
                "author": {"name": "Alice", "email": "a@example.com", "date": "2024-01-01T08:00:00Z"},
                "committer": {"name": "GitHub", "email": "noreply@github.com", "date": "2024-01-02T09:00:00Z"}
            }
        }))
        .unwrap();

        let record = CommitRecord::from(item);
        assert_eq!(record.sha, "abc123");
        assert_eq!(record.author, "Alice");
        assert_eq!(record.date, "2024-01-02T09:00:00Z");
        assert!(record.message.starts_with("fix: handle empty pages"));
    }

    #[test]
    fn test_draft_release_has_no_record() {
        let draft: ApiRelease = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": null,
            "tag_name": "v0.1.0",
            "published_at": null,
            "body": null,
            "draft": true
        }))
        .unwrap();
        assert!(draft.into_record().is_none());
    }
}
